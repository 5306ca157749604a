use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::endpoint_resolver::{Endpoint, EndpointResolver};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub weather: WeatherSettings,
    #[serde(default)]
    pub robot: RobotSettings,
    #[serde(default)]
    pub history: HistorySettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WeatherSettings {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.nasa.gov/insight_weather/".to_string(),
            api_key: "DEMO_KEY".to_string(),
            connect_timeout_secs: 15,
            read_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RobotSettings {
    /// Host loopback as seen from an Android emulator.
    pub primary_host: String,
    pub secondary_host: String,
    pub port: u16,
    pub simulation_delay_ms: u64,
    pub probe_delay_ms: u64,
}

impl Default for RobotSettings {
    fn default() -> Self {
        Self {
            primary_host: "10.0.2.2".to_string(),
            secondary_host: "127.0.0.1".to_string(),
            port: 1056,
            simulation_delay_ms: 500,
            probe_delay_ms: 1000,
        }
    }
}

impl RobotSettings {
    pub fn resolver(&self) -> EndpointResolver {
        EndpointResolver::new(vec![
            Endpoint::new(self.primary_host.clone(), self.port),
            Endpoint::new(self.secondary_host.clone(), self.port),
        ])
    }

    pub fn simulation_delay(&self) -> Duration {
        Duration::from_millis(self.simulation_delay_ms)
    }

    pub fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HistorySettings {
    pub directory: String,
    pub store_name: String,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            directory: "data".to_string(),
            store_name: "robot_command_history".to_string(),
        }
    }
}

/// Load `config/meteomars.*` if present, then `METEOMARS__SECTION__KEY` overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/meteomars")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("METEOMARS")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
