// InSight weather document parsing
use crate::domain::weather::{WeatherRecord, WIND_SECTORS};
use crate::error::ParseError;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Parse one weather document into records, newest sol first.
///
/// Only a document that is not a JSON object fails. Anything missing or
/// malformed inside a sol is treated as an absent reading.
pub fn parse_weather_document(raw: &str) -> Result<Vec<WeatherRecord>, ParseError> {
    let document: Value = serde_json::from_str(raw)?;
    let root = document.as_object().ok_or(ParseError::NotAnObject)?;

    let sol_keys = sorted_sol_keys(root);

    let records = sol_keys
        .into_iter()
        .filter_map(|key| {
            let sol = root.get(&key)?.as_object()?;
            Some(parse_sol(key, sol))
        })
        .collect();

    Ok(records)
}

/// Keys listed in `sol_keys`, or every all-digit top-level key when that list
/// is absent, ordered by numeric value descending.
fn sorted_sol_keys(root: &Map<String, Value>) -> Vec<String> {
    let candidates: Vec<String> = match root.get("sol_keys").and_then(Value::as_array) {
        Some(listed) => listed
            .iter()
            .filter_map(|k| match k {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        None => root.keys().filter(|k| is_sol_key(k)).cloned().collect(),
    };

    let mut seen = HashSet::new();
    let mut keys: Vec<String> = candidates
        .into_iter()
        .filter(|k| seen.insert(k.clone()))
        .collect();

    keys.sort_by_key(|k| std::cmp::Reverse(k.parse::<i64>().unwrap_or(0)));
    keys
}

fn is_sol_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn parse_sol(sol_key: String, sol: &Map<String, Value>) -> WeatherRecord {
    let mut record = WeatherRecord::empty(sol_key);

    if let Some(at) = sol.get("AT") {
        record.average_temperature = number_at(at, "av").unwrap_or(0.0);
        record.min_temperature = number_at(at, "mn");
        record.max_temperature = number_at(at, "mx");
    }

    record.wind_speed_average = sol.get("HWS").and_then(|hws| number_at(hws, "av"));
    record.average_pressure = sol
        .get("PRE")
        .and_then(|pre| number_at(pre, "av"))
        .unwrap_or(0.0);

    if let Some(wd) = sol.get("WD").and_then(Value::as_object) {
        record.dominant_wind_direction = wd
            .get("most_common")
            .and_then(|mc| mc.get("compass_point"))
            .and_then(Value::as_str)
            .map(str::to_string);

        for sector in 0..WIND_SECTORS {
            if let Some(count) = wd.get(&sector.to_string()).and_then(|d| number_at(d, "ct")) {
                record.add_wind_observation(sector, count);
            }
        }
    }

    record.season = text(sol, "Season");
    record.first_observed_at = text(sol, "First_UTC");
    record.last_observed_at = text(sol, "Last_UTC");

    record
}

/// Numeric field of a nested object; numeric strings are accepted too.
fn number_at(parent: &Value, field: &str) -> Option<f64> {
    let value = match parent.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

fn text(sol: &Map<String, Value>, field: &str) -> Option<String> {
    sol.get(field).and_then(Value::as_str).map(str::to_string)
}
