use thiserror::Error;

use crate::session::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("Unknown or eliminated player: {target}")]
    UnknownPlayer { target: String },
    #[error("Cannot {operation} during {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },
}

impl GameError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
