//! Error module for the cuckoo table crate.
//!
//! Table operations report [`CuckooTableError`](crate::table::CuckooTableError);
//! this module adds the application-level error used by configuration loading
//! and the command-line tool, with conversions from every lower-level error.

use thiserror::Error;

use crate::table::CuckooTableError;

pub mod config;

/// Result type alias used by the application layer.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the application layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors reported by the table itself.
    #[error("Table error: {0}")]
    Table(#[from] CuckooTableError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// Returns `true` if this error is the table reporting that it is full.
    pub fn is_table_full(&self) -> bool {
        matches!(self, AppError::Table(CuckooTableError::TableFull { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_conversion() {
        let err: AppError = CuckooTableError::TableFull { key: 7, attempted: 3 }.into();
        assert!(err.is_table_full());
        assert!(err.to_string().starts_with("Table error: Cuckoo table is full"));
    }

    #[test]
    fn test_custom_error() {
        let err = AppError::Custom("bad entry".to_string());
        assert!(!err.is_table_full());
        assert_eq!(err.to_string(), "bad entry");
    }
}
