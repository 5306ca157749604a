// Error types shared across layers
use crate::domain::command::RobotCommand;
use thiserror::Error;

/// The weather document could not be read as a JSON object.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid weather document: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("weather document is not a JSON object")]
    NotAnObject,
}

/// The weather service could not be reached or answered with a failure.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Erreur de connexion avec le code: {0}")]
    Status(reqwest::StatusCode),

    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Every candidate endpoint failed for a command or probe exchange.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ConnectionError {
    pub message: String,
}

impl ConnectionError {
    pub fn unreachable() -> Self {
        Self {
            message: "Erreur: impossible de se connecter au serveur".to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown robot command: {0}")]
pub struct UnknownCommand(pub String);

/// A command was refused before anything was sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("robot session is still connecting")]
    NotConnected,

    #[error("command {0} is not available in the current motor state")]
    Disabled(RobotCommand),
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("command name must be non-empty and must not contain a comma: {0:?}")]
    InvalidName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConnectionError::unreachable();
        assert_eq!(err.to_string(), "Erreur: impossible de se connecter au serveur");

        let err = FetchError::Status(reqwest::StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Erreur de connexion avec le code: 403 Forbidden");

        let err = HistoryError::InvalidName("A,B".to_string());
        assert_eq!(
            err.to_string(),
            "command name must be non-empty and must not contain a comma: \"A,B\""
        );

        assert_eq!(
            ControlError::Disabled(RobotCommand::Stop).to_string(),
            "command STOP is not available in the current motor state"
        );

        assert_eq!(
            UnknownCommand("JUMP".to_string()).to_string(),
            "unknown robot command: JUMP"
        );

        assert_eq!(
            ParseError::NotAnObject.to_string(),
            "weather document is not a JSON object"
        );
    }
}
