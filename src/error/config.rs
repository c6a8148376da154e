//! Configuration error module.
//!
//! Errors that may occur while loading, parsing, and validating configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::table::CuckooTableError;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when parsing the configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error when serializing the configuration for output.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),
}

impl From<CuckooTableError> for ConfigError {
    fn from(err: CuckooTableError) -> Self {
        match err {
            CuckooTableError::InvalidConfiguration(message) => ConfigError::ValidationError(message),
            other => ConfigError::ValidationError(other.to_string()),
        }
    }
}
