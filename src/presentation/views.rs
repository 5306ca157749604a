// JSON views - Pure projections of domain state
use crate::application::robot_service::CommandOutcome;
use crate::domain::command::CommandStyle;
use crate::domain::history::{self, HistoryEntry};
use crate::domain::robot::{RobotState, SessionMode};
use crate::domain::weather::{format_observed_at, format_reading, WeatherRecord};
use crate::domain::wind_rose::{WindRose, CARDINAL_LABELS};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub error: String,
}

impl ErrorView {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SolSummaryView {
    pub sol: String,
    pub title: String,
    pub average_temperature: f64,
    pub average_pressure: f64,
    pub temperature_label: String,
    pub pressure_label: String,
}

impl From<&WeatherRecord> for SolSummaryView {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            sol: record.sol.clone(),
            title: record.title(),
            average_temperature: record.average_temperature,
            average_pressure: record.average_pressure,
            temperature_label: record.temperature_label(),
            pressure_label: record.pressure_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PetalView {
    pub sector: u8,
    pub value: f64,
    pub angle_degrees: f64,
    pub normalized: f64,
    pub tip: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct WindRoseView {
    pub has_data: bool,
    pub max_value: f64,
    pub cardinal_labels: [&'static str; 4],
    pub petals: Vec<PetalView>,
}

impl From<WindRose> for WindRoseView {
    fn from(rose: WindRose) -> Self {
        Self {
            has_data: !rose.is_empty(),
            max_value: rose.max_value,
            cardinal_labels: CARDINAL_LABELS,
            petals: rose
                .petals
                .into_iter()
                .map(|p| PetalView {
                    sector: p.sector,
                    value: p.value,
                    angle_degrees: p.angle_degrees,
                    normalized: p.normalized,
                    tip: [p.tip_x, p.tip_y],
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SolDetailView {
    pub sol: String,
    pub title: String,
    pub season: Option<String>,
    pub temperature: ReadingView,
    pub pressure: ReadingView,
    pub wind_speed_average: Option<f64>,
    pub dominant_wind_direction: Option<String>,
    pub first_observed_at: String,
    pub last_observed_at: String,
    pub wind_rose: WindRoseView,
}

/// Average/min/max triple, already formatted for display.
#[derive(Debug, Serialize)]
pub struct ReadingView {
    pub average: String,
    pub min: String,
    pub max: String,
}

impl From<&WeatherRecord> for SolDetailView {
    fn from(record: &WeatherRecord) -> Self {
        let (pressure_low, pressure_high) = record.pressure_band();
        Self {
            sol: record.sol.clone(),
            title: record.title(),
            season: record.season.clone(),
            temperature: ReadingView {
                average: format_reading(Some(record.average_temperature)),
                min: format_reading(record.min_temperature),
                max: format_reading(record.max_temperature),
            },
            pressure: ReadingView {
                average: format_reading(Some(record.average_pressure)),
                min: format_reading(Some(pressure_low)),
                max: format_reading(Some(pressure_high)),
            },
            wind_speed_average: record.wind_speed_average,
            dominant_wind_direction: record.dominant_wind_direction.clone(),
            first_observed_at: format_observed_at(record.first_observed_at.as_deref()),
            last_observed_at: format_observed_at(record.last_observed_at.as_deref()),
            wind_rose: WindRose::from_record(record).into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RobotView {
    pub mode: SessionMode,
    pub motors_started: bool,
    pub status: &'static str,
    pub last_response: String,
    pub error_message: Option<String>,
    pub history_count: usize,
}

impl RobotView {
    pub fn new(state: &RobotState, history_count: usize) -> Self {
        Self {
            mode: state.mode,
            motors_started: state.motors_started,
            status: state.status_line(),
            last_response: state.last_response.clone(),
            error_message: state.error_message.clone(),
            history_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandOutcomeView {
    pub command: &'static str,
    pub response: String,
    pub delivered: bool,
    pub notification: String,
    pub motors_started: bool,
    pub status: &'static str,
}

impl From<&CommandOutcome> for CommandOutcomeView {
    fn from(outcome: &CommandOutcome) -> Self {
        Self {
            command: outcome.command.as_str(),
            response: outcome.response.clone(),
            delivered: outcome.delivered,
            notification: outcome.notification.clone(),
            motors_started: outcome.state.motors_started,
            status: outcome.state.status_line(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryView {
    pub number: usize,
    pub label: String,
    pub command: String,
    pub display_name: String,
    pub style: CommandStyle,
}

impl From<HistoryEntry> for HistoryEntryView {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            label: entry.label(),
            number: entry.number,
            command: entry.command,
            display_name: entry.display_name,
            style: entry.style,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryView {
    pub total: usize,
    pub summary: String,
    pub entries: Vec<HistoryEntryView>,
}

impl HistoryView {
    pub fn new(stored: &[String]) -> Self {
        Self {
            total: stored.len(),
            summary: history::summary(stored.len()),
            entries: history::newest_first(stored)
                .into_iter()
                .map(HistoryEntryView::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_view_formatting() {
        let mut record = WeatherRecord::empty("259".to_string());
        record.average_temperature = -62.314;
        record.min_temperature = Some(-96.8821);
        record.average_pressure = 700.0;
        record.first_observed_at = Some("2019-08-19T08:03:59Z".to_string());
        record.add_wind_observation(8, 30.0);

        let view = SolDetailView::from(&record);
        assert_eq!(view.title, "Sol n°259");
        assert_eq!(view.temperature.average, "-62.31");
        assert_eq!(view.temperature.min, "-96.88");
        assert_eq!(view.temperature.max, "N/A");
        assert_eq!(view.pressure.min, "665.00");
        assert_eq!(view.pressure.max, "735.00");
        assert_eq!(view.first_observed_at, "19/08/2019 08:03");
        assert_eq!(view.last_observed_at, "N/A");
        assert_eq!(view.wind_rose.petals.len(), 1);
        assert_eq!(view.wind_rose.petals[0].angle_degrees, 180.0);
    }

    #[test]
    fn test_history_view() {
        let stored = vec!["START".to_string(), "STOP".to_string()];
        let view = HistoryView::new(&stored);
        assert_eq!(view.total, 2);
        assert_eq!(view.summary, "2 commandes enregistrées");
        assert_eq!(view.entries[0].label, "Commande #2");
        assert_eq!(view.entries[0].display_name, "ARRÊTER");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["entries"][1]["style"], "start");
    }
}
