// Robot control panel state
use super::command::{is_failure_response, reports_motors_cut, RobotCommand};
use serde::Serialize;

pub const PROBE_SUCCESS_MESSAGE: &str = "Connexion au serveur réussie";
pub const SIMULATION_MESSAGE: &str = "Mode simulation activé (pas de connexion au serveur)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// No probe has completed yet.
    Connecting,
    Live,
    Simulation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RobotState {
    pub mode: SessionMode,
    pub motors_started: bool,
    pub last_response: String,
    pub error_message: Option<String>,
}

impl Default for RobotState {
    fn default() -> Self {
        Self {
            mode: SessionMode::Connecting,
            motors_started: false,
            last_response: String::new(),
            error_message: None,
        }
    }
}

impl RobotState {
    pub fn enter_live(&mut self) {
        self.mode = SessionMode::Live;
        self.last_response = PROBE_SUCCESS_MESSAGE.to_string();
        self.error_message = None;
    }

    pub fn enter_simulation(&mut self, error: String) {
        self.mode = SessionMode::Simulation;
        self.last_response = SIMULATION_MESSAGE.to_string();
        self.error_message = Some(error);
    }

    /// START is offered only while stopped and STOP only while running.
    pub fn is_enabled(&self, command: RobotCommand) -> bool {
        match command {
            RobotCommand::Start => !self.motors_started,
            RobotCommand::Stop => self.motors_started,
            _ => true,
        }
    }

    pub fn apply_response(&mut self, command: RobotCommand, response: &str) {
        self.last_response = response.to_string();
        match command {
            RobotCommand::Start if !is_failure_response(response) => self.motors_started = true,
            RobotCommand::Stop if !is_failure_response(response) => self.motors_started = false,
            RobotCommand::DirectLeft | RobotCommand::DirectRight | RobotCommand::DirectFront
                if reports_motors_cut(response) =>
            {
                self.motors_started = false
            }
            _ => {}
        }
    }

    pub fn status_line(&self) -> &'static str {
        if self.motors_started {
            "Moteurs: En marche"
        } else {
            "Moteurs: À l'arrêt"
        }
    }
}
