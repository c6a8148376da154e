// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the cuckoo table.

use serde::{Deserialize, Serialize};

use super::error::{CuckooTableError, Result};
use super::hash::{self, BoxedStrategy, DEFAULT_FNV_SEEDS};

/// Lower bound for the derived displacement limit.
pub const MIN_DISPLACEMENTS: usize = 8;

/// Multiplier applied to `ceil(log2(size))` when deriving the displacement limit.
pub const DISPLACEMENT_LOG_FACTOR: usize = 6;

/// Which pair of hash strategies a configured table uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HashScheme {
    /// `key mod size` and `(key div size) mod size`.
    #[default]
    Default,
    /// Two seeded FNV-1a strategies.
    Fnv {
        /// Seed for the first table
        first_seed: u64,
        /// Seed for the second table
        second_seed: u64,
    },
}

impl HashScheme {
    /// An FNV scheme with the built-in seeds.
    pub fn fnv() -> Self {
        HashScheme::Fnv {
            first_seed: DEFAULT_FNV_SEEDS.0,
            second_seed: DEFAULT_FNV_SEEDS.1,
        }
    }

    /// Builds the strategy pair described by this scheme.
    pub fn strategies(&self) -> (BoxedStrategy, BoxedStrategy) {
        match self {
            HashScheme::Default => hash::default_pair(),
            HashScheme::Fnv {
                first_seed,
                second_seed,
            } => hash::fnv_pair(*first_seed, *second_seed),
        }
    }
}

/// Configuration for the cuckoo table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuckooTableConfig {
    /// Number of slots in each of the two tables.
    pub size: u64,

    /// Maximum number of entries moved along one displacement chain.
    /// When unset, a limit is derived from `size`.
    pub max_displacements: Option<usize>,

    /// Hash strategy pair.
    pub hash: HashScheme,
}

impl CuckooTableConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots per table.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Sets an explicit displacement limit.
    pub fn with_max_displacements(mut self, max_displacements: usize) -> Self {
        self.max_displacements = Some(max_displacements);
        self
    }

    /// Sets the hash strategy pair.
    pub fn with_hash(mut self, hash: HashScheme) -> Self {
        self.hash = hash;
        self
    }

    /// The displacement limit a table built from this configuration uses.
    pub fn effective_max_displacements(&self) -> usize {
        self.max_displacements
            .unwrap_or_else(|| derived_max_displacements(self.size))
    }

    /// Checks that a table can be built from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CuckooTableError::InvalidConfiguration`] if `size` is zero or does
    /// not fit in memory addressing, or if `max_displacements` is explicitly zero.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(CuckooTableError::InvalidConfiguration(
                "size must be greater than 0".to_string(),
            ));
        }

        if usize::try_from(self.size).is_err() {
            return Err(CuckooTableError::InvalidConfiguration(format!(
                "size {} exceeds the addressable range",
                self.size
            )));
        }

        if self.max_displacements == Some(0) {
            return Err(CuckooTableError::InvalidConfiguration(
                "max_displacements must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CuckooTableConfig {
    fn default() -> Self {
        Self {
            size: 1_024,
            max_displacements: None,
            hash: HashScheme::Default,
        }
    }
}

/// `max(MIN_DISPLACEMENTS, DISPLACEMENT_LOG_FACTOR * ceil(log2(size)))`.
pub fn derived_max_displacements(size: u64) -> usize {
    let log2 = if size <= 1 {
        0
    } else {
        (u64::BITS - (size - 1).leading_zeros()) as usize
    };
    (DISPLACEMENT_LOG_FACTOR * log2).max(MIN_DISPLACEMENTS)
}
