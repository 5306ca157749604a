// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::robot_service::RobotControlService;
use crate::application::weather_service::WeatherService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::history_store::{CommandHistoryStore, PreferencesFile};
use crate::infrastructure::insight_client::InsightClient;
use crate::infrastructure::simulated_transport::SimulatedTransport;
use crate::infrastructure::tcp_transport::TcpCommandTransport;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("meteomars_console=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;

    // Create adapters (infrastructure layer)
    let weather_source = Arc::new(
        InsightClient::new(&config.weather).context("Failed to build weather client")?,
    );
    let resolver = config.robot.resolver();
    for endpoint in resolver.candidates() {
        tracing::info!("Robot endpoint candidate: {}", endpoint);
    }
    let live_transport = Arc::new(TcpCommandTransport::new(resolver));
    let simulated_transport = Arc::new(SimulatedTransport::new(config.robot.simulation_delay()));
    let prefs = PreferencesFile::open(&config.history.directory, &config.history.store_name);
    tracing::info!("Command history stored in {}", prefs.path().display());
    let history = Arc::new(CommandHistoryStore::new(prefs));

    // Create services (application layer)
    let weather_service = WeatherService::new(weather_source);
    let robot_service = RobotControlService::new(
        live_transport,
        simulated_transport,
        history,
        config.robot.probe_delay(),
    );

    // Probe the robot server once in the background; the panel reports
    // "connecting" until this completes.
    let session = robot_service.clone();
    tokio::spawn(async move {
        let state = session.enter_session().await;
        tracing::info!("Robot session ready in {:?} mode", state.mode);
    });

    let state = Arc::new(AppState {
        weather_service,
        robot_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting meteomars-console on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
