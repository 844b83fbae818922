//! Command-level error handling
//!
//! Wraps core conversion errors together with the caller-side failures
//! (missing fields, bad free-text input, settings I/O). All variants are
//! serializable so a presentation shell can forward them as JSON.

use thiserror::Error;
use serde::Serialize;

use crate::shared::error::ConversionError;

/// Message shown when value, category or units are missing
pub const ERR_INCOMPLETE_FIELDS: &str = "Please complete all fields";

/// Command execution errors
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CommandError {
    /// Conversion core rejected the request
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Value, category or one of the units was not provided
    #[error("Please complete all fields")]
    IncompleteFields,

    /// Invalid input or parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// System I/O error (settings file, config directory)
    #[error("System I/O error: {0}")]
    SystemIO(String),
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::SystemIO(err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::InvalidInput(format!("JSON error: {}", err))
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
