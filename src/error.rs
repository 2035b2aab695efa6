//! Error types for the overrule configuration binding library.

use std::path::PathBuf;
use thiserror::Error;

/// Collection-related errors
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Destination capacity exceeded: need {needed} slots at offset {offset}, have {available}")]
    CapacityExceeded {
        needed: usize,
        offset: usize,
        available: usize,
    },
}

/// Binding and settings-loading errors
#[derive(Debug, Error)]
pub enum BindError {
    #[error("Settings file not found: {0:?}")]
    SettingsNotFound(PathBuf),

    #[error("Expected an array for '{field}', got {found}")]
    ExpectedArray { field: String, found: String },

    #[error("Invalid value for '{field}': {source}")]
    InvalidValue {
        field: String,
        source: serde_json::Error,
    },

    #[error("Invalid logging configuration: {0}")]
    InvalidLogging(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
