//! Core error types for pulpit-core.
//!
//! Errors are defined with thiserror. Reading the wall clock and sorting a
//! seed list cannot fail, so errors only arise at the edges: configuration
//! I/O and caller-supplied values.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The data directory could not be determined or created
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Poll interval outside [1 s, 1 day]
    #[error("Invalid poll interval of {millis}ms: must be between 1 and 86400 seconds")]
    InvalidInterval { millis: u64 },

    /// Category label not in the fixed set
    #[error("Unknown category '{label}'")]
    UnknownCategory { label: String },

    /// No entry carries the requested id
    #[error("No entry with id {id}")]
    UnknownEntry { id: u32 },

    /// Duration string is not `MM:SS`
    #[error("Invalid duration '{value}': expected MM:SS")]
    InvalidDuration { value: String },

    /// Calendar day string could not be parsed
    #[error("Invalid calendar day '{value}'")]
    InvalidCalendarDay { value: String },
}
