// Ports implemented by the infrastructure layer
use crate::domain::command::RobotCommand;
use crate::error::{ConnectionError, FetchError, HistoryError};
use async_trait::async_trait;

#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the raw weather document, one HTTP round trip per call.
    async fn fetch_document(&self) -> Result<String, FetchError>;
}

/// One command/response exchange with the robot, real or fabricated.
#[async_trait]
pub trait CommandTransport: Send + Sync {
    async fn send(&self, command: RobotCommand) -> Result<String, ConnectionError>;

    /// Check that the robot server is reachable without sending a payload.
    async fn probe(&self) -> Result<(), ConnectionError> {
        Ok(())
    }
}

/// Durable append-only log of issued command names, oldest first.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn append(&self, command: &str) -> Result<(), HistoryError>;

    async fn read_all(&self) -> Result<Vec<String>, HistoryError>;

    async fn clear(&self) -> Result<(), HistoryError>;
}
