//! Test modules for the cuckoo table crate.
//!
//! This module contains the crate-internal test suite:
//! - Configuration loading and validation
//! - Error conversions
//! - Property-based tests of the table using proptest
//! - Test fixtures and strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, operations_strategy, Operation, TestFixture};
