// Robot control service - Session selection, command dispatch and history
use crate::application::ports::{CommandTransport, HistoryRepository};
use crate::domain::command::RobotCommand;
use crate::domain::robot::{RobotState, SessionMode};
use crate::error::{ControlError, HistoryError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub command: RobotCommand,
    pub response: String,
    /// False when every endpoint failed and `response` is the connection error.
    pub delivered: bool,
    pub notification: String,
    pub state: RobotState,
}

struct Session {
    state: RobotState,
    transport: Option<Arc<dyn CommandTransport>>,
}

#[derive(Clone)]
pub struct RobotControlService {
    live: Arc<dyn CommandTransport>,
    simulated: Arc<dyn CommandTransport>,
    history: Arc<dyn HistoryRepository>,
    session: Arc<Mutex<Session>>,
    probe_delay: Duration,
}

impl RobotControlService {
    pub fn new(
        live: Arc<dyn CommandTransport>,
        simulated: Arc<dyn CommandTransport>,
        history: Arc<dyn HistoryRepository>,
        probe_delay: Duration,
    ) -> Self {
        Self {
            live,
            simulated,
            history,
            session: Arc::new(Mutex::new(Session {
                state: RobotState::default(),
                transport: None,
            })),
            probe_delay,
        }
    }

    /// Probe the robot server once and pick the transport for this session.
    pub async fn enter_session(&self) -> RobotState {
        tokio::time::sleep(self.probe_delay).await;

        let probe = self.live.probe().await;

        let mut session = self.session.lock().await;
        match probe {
            Ok(()) => {
                tracing::info!("Robot server reachable, using live transport");
                session.transport = Some(self.live.clone());
                session.state.enter_live();
            }
            Err(e) => {
                tracing::warn!("Robot server unreachable, switching to simulation: {}", e);
                session.transport = Some(self.simulated.clone());
                session.state.enter_simulation(e.message);
            }
        }
        session.state.clone()
    }

    pub async fn state(&self) -> RobotState {
        self.session.lock().await.state.clone()
    }

    /// Send one command and fold its response into the session state.
    ///
    /// The command is appended to the persisted history in every mode, including
    /// simulation and undelivered exchanges.
    ///
    /// The session lock is not held during the exchange, so overlapping commands
    /// may complete in either order.
    pub async fn issue(&self, command: RobotCommand) -> Result<CommandOutcome, ControlError> {
        let transport = {
            let session = self.session.lock().await;
            if session.state.mode == SessionMode::Connecting {
                return Err(ControlError::NotConnected);
            }
            if !session.state.is_enabled(command) {
                return Err(ControlError::Disabled(command));
            }
            session
                .transport
                .clone()
                .ok_or(ControlError::NotConnected)?
        };

        let (response, delivered, notification) = match transport.send(command).await {
            Ok(response) => {
                let notification = format!("Commande: {}, Réponse: {}", command, response);
                (response, true, notification)
            }
            Err(e) => {
                tracing::warn!("Command {} not delivered: {}", command, e);
                (e.message.clone(), false, e.message)
            }
        };

        let state = {
            let mut session = self.session.lock().await;
            session.state.apply_response(command, &response);
            session.state.clone()
        };

        if let Err(e) = self.history.append(command.as_str()).await {
            tracing::error!("Failed to record command {} in history: {}", command, e);
        }

        Ok(CommandOutcome {
            command,
            response,
            delivered,
            notification,
            state,
        })
    }

    pub async fn history(&self) -> Result<Vec<String>, HistoryError> {
        self.history.read_all().await
    }

    pub async fn clear_history(&self) -> Result<(), HistoryError> {
        self.history.clear().await
    }
}
