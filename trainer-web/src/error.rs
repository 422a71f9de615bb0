//! Error types for the trainer

use thiserror::Error;

use crate::exercise::Exercise;

/// Errors raised at the crate's input boundaries
///
/// Frames that are well-formed but lack landmarks are not errors; they
/// come back as `FrameOutcome::Skipped`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainerError {
    #[error("Malformed landmark frame: {0}")]
    MalformedFrame(String),

    #[error("Invalid {exercise} rule: {reason}")]
    InvalidRule { exercise: Exercise, reason: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No session started")]
    NotInitialized,
}

impl From<serde_json::Error> for TrainerError {
    fn from(err: serde_json::Error) -> Self {
        TrainerError::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrainerError>;
