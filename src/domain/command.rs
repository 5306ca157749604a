// Robot command vocabulary and response interpretation
use crate::error::UnknownCommand;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Sentinel returned when the server closes the connection without a line.
pub const NO_RESPONSE: &str = "No response";

const MOTORS_CUT_PHRASE: &str = "MOTEURS SONT COUPES";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotCommand {
    Start,
    Stop,
    DirectLeft,
    DirectRight,
    DirectFront,
}

impl RobotCommand {
    pub const ALL: [RobotCommand; 5] = [
        RobotCommand::Start,
        RobotCommand::Stop,
        RobotCommand::DirectLeft,
        RobotCommand::DirectRight,
        RobotCommand::DirectFront,
    ];

    /// Wire form, also used as the history entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            RobotCommand::Start => "START",
            RobotCommand::Stop => "STOP",
            RobotCommand::DirectLeft => "DIRECT_LEFT",
            RobotCommand::DirectRight => "DIRECT_RIGHT",
            RobotCommand::DirectFront => "DIRECT_FRONT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RobotCommand::Start => "DÉMARRER",
            RobotCommand::Stop => "ARRÊTER",
            RobotCommand::DirectLeft => "TOURNER À GAUCHE",
            RobotCommand::DirectRight => "TOURNER À DROITE",
            RobotCommand::DirectFront => "AVANCER TOUT DROIT",
        }
    }

    pub fn style(&self) -> CommandStyle {
        match self {
            RobotCommand::Start => CommandStyle::Start,
            RobotCommand::Stop => CommandStyle::Stop,
            RobotCommand::DirectLeft | RobotCommand::DirectRight => CommandStyle::Turn,
            RobotCommand::DirectFront => CommandStyle::Forward,
        }
    }

    /// Response fabricated locally when no server is reachable.
    pub fn simulated_response(&self) -> &'static str {
        match self {
            RobotCommand::Start => "SUCCESS: Moteurs démarrés",
            RobotCommand::Stop => "SUCCESS: Moteurs arrêtés",
            RobotCommand::DirectLeft => "SUCCESS: Tourne à gauche",
            RobotCommand::DirectRight => "SUCCESS: Tourne à droite",
            RobotCommand::DirectFront => "SUCCESS: Avance tout droit",
        }
    }
}

impl fmt::Display for RobotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RobotCommand::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStyle {
    Start,
    Stop,
    Turn,
    Forward,
    Plain,
}

/// The server has no structured status field; callers only get free text.
///
/// These checks match substrings case-insensitively. They are fragile but the
/// robot server depends on them, so they are kept as-is.
pub fn is_failure_response(response: &str) -> bool {
    let upper = response.to_uppercase();
    upper.contains("ERROR") || upper.contains("ERREUR")
}

pub fn reports_motors_cut(response: &str) -> bool {
    response.to_uppercase().contains(MOTORS_CUT_PHRASE)
}
