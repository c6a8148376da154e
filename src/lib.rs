//! Cuckoo Table Library
//!
//! A fixed-capacity associative container built on two-choice (cuckoo)
//! hashing: each `u64` key maps to exactly one of two candidate slots, one per
//! table. The [`table`] module holds the data structure; [`config`] and
//! [`error`] provide the configuration layer and application errors used by the
//! `cuckoo_table` binary.
//!
//! # Architecture
//!
//! - Pluggable hash strategies bound at construction
//! - Bounded, planned displacement with an explicit "table full" result
//! - Single-threaded core with an optional lock-guarded shared handle
//! - Comprehensive error handling and propagation

pub mod config;
pub mod error;
pub mod table;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the cuckoo table library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
