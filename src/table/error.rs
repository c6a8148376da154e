// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the cuckoo table.

use super::entry::TableSide;

/// Error types for cuckoo table operations
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum CuckooTableError {
    /// No displacement chain from either candidate slot reached a free slot
    #[error("Cuckoo table is full: cannot place key {key} after {attempted} displacement steps")]
    TableFull {
        /// The key that could not be placed
        key: u64,
        /// Total displacement steps explored across both chains
        attempted: usize,
    },

    /// A hash strategy returned an index outside the table
    #[error("Hash strategy for the {side} table returned index {index} for key {key}, table size is {size}")]
    HashOutOfRange {
        /// The table whose strategy misbehaved
        side: TableSide,
        /// The key being hashed
        key: u64,
        /// The offending index
        index: u64,
        /// The table size
        size: u64,
    },

    /// Configuration error
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The operation is not provided by this table
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}

/// Result type for cuckoo table operations
pub type Result<T> = std::result::Result<T, CuckooTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CuckooTableError::TableFull {
            key: 39,
            attempted: 12,
        };
        assert_eq!(
            err.to_string(),
            "Cuckoo table is full: cannot place key 39 after 12 displacement steps"
        );

        let err = CuckooTableError::InvalidConfiguration("size must be greater than 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: size must be greater than 0"
        );

        let err = CuckooTableError::HashOutOfRange {
            side: TableSide::Second,
            key: 5,
            index: 11,
            size: 11,
        };
        assert!(err.to_string().contains("second table"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = CuckooTableError::Unsupported("delete");
        let err2 = CuckooTableError::Unsupported("delete");
        let err3 = CuckooTableError::TableFull { key: 1, attempted: 0 };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
