// Offline stand-in for the robot server
use crate::application::ports::CommandTransport;
use crate::domain::command::RobotCommand;
use crate::error::ConnectionError;
use async_trait::async_trait;
use std::time::Duration;

/// Answers every command locally after a fixed delay; never touches the network.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl CommandTransport for SimulatedTransport {
    async fn send(&self, command: RobotCommand) -> Result<String, ConnectionError> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!("Simulated response for {}", command);
        Ok(command.simulated_response().to_string())
    }
}
