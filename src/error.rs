use thiserror::Error;

use crate::note::NoteId;

/// Errors raised by internal lookups that expect a note to exist.
///
/// Public operations never surface these: they log and fall back to a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Note {0} does not exist")]
    NoteNotFound(NoteId),
}

/// Errors that can occur while loading a canvas configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
