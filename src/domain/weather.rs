// Mars weather domain model
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Number of compass sectors reported by the wind sensor.
pub const WIND_SECTORS: u8 = 16;

/// One weather reading per Martian solar day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub sol: String,
    pub average_temperature: f64,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub average_pressure: f64,
    pub wind_speed_average: Option<f64>,
    pub dominant_wind_direction: Option<String>,
    /// Sector index (0 = north, clockwise, 22.5° per step) to observation count.
    pub wind_direction_histogram: BTreeMap<u8, f64>,
    pub max_wind_direction_value: f64,
    pub season: Option<String>,
    pub first_observed_at: Option<String>,
    pub last_observed_at: Option<String>,
}

impl WeatherRecord {
    /// A record with every reading absent or defaulted.
    pub fn empty(sol: String) -> Self {
        Self {
            sol,
            average_temperature: 0.0,
            min_temperature: None,
            max_temperature: None,
            average_pressure: 0.0,
            wind_speed_average: None,
            dominant_wind_direction: None,
            wind_direction_histogram: BTreeMap::new(),
            max_wind_direction_value: 0.0,
            season: None,
            first_observed_at: None,
            last_observed_at: None,
        }
    }

    /// Record a wind sector observation, keeping the running maximum in step.
    ///
    /// Sectors outside 0..16 and non-positive or non-finite counts are ignored so
    /// that the maximum is 0.0 exactly when the histogram is empty. A sector the
    /// source reports with `ct == 0` is therefore absent from the histogram, not
    /// present with a zero count.
    pub fn add_wind_observation(&mut self, sector: u8, count: f64) {
        if sector >= WIND_SECTORS || !count.is_finite() || count <= 0.0 {
            return;
        }
        self.wind_direction_histogram.insert(sector, count);
        if count > self.max_wind_direction_value {
            self.max_wind_direction_value = count;
        }
    }

    pub fn title(&self) -> String {
        format!("Sol n°{}", self.sol)
    }

    pub fn temperature_label(&self) -> String {
        format!("Température: {:.1}°C", self.average_temperature)
    }

    pub fn pressure_label(&self) -> String {
        format!("Pression: {:.2} Pa", self.average_pressure)
    }

    /// Pressure band shown next to the average on the detail view.
    pub fn pressure_band(&self) -> (f64, f64) {
        (self.average_pressure * 0.95, self.average_pressure * 1.05)
    }
}

pub fn format_reading(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

/// Reformat an observation timestamp (`2020-02-17T12:34:56Z`) for display.
///
/// Unparseable input is returned verbatim.
pub fn format_observed_at(value: Option<&str>) -> String {
    match value {
        None | Some("") => "N/A".to_string(),
        Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ")
            .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}
