// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash strategies for the cuckoo table.
//!
//! Each of the two slot arrays is addressed by its own strategy. A strategy maps
//! `(key, size)` to an index that must be strictly less than `size` for every
//! key; the table rejects out-of-range indices rather than indexing with them.
//!
//! Plain functions and closures with the signature `Fn(u64, u64) -> u64` are
//! strategies too, which keeps tests able to force specific collisions.

use std::fmt;
use std::hash::Hasher;

use fnv::FnvHasher;

/// Maps a key to a slot index in a table of the given size.
pub trait HashStrategy: Send + Sync {
    /// Computes the slot index for `key` in a table of `size` slots.
    ///
    /// Implementations must return a value in `0..size` for every key.
    fn slot_index(&self, key: u64, size: u64) -> u64;

    /// Human readable name used in logs and debug output.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> HashStrategy for F
where
    F: Fn(u64, u64) -> u64 + Send + Sync,
{
    fn slot_index(&self, key: u64, size: u64) -> u64 {
        self(key, size)
    }
}

/// `key mod size`, the default strategy for the first table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuloHash;

impl HashStrategy for ModuloHash {
    fn slot_index(&self, key: u64, size: u64) -> u64 {
        key % size
    }

    fn name(&self) -> &str {
        "modulo"
    }
}

/// `(key div size) mod size`, the default strategy for the second table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuotientHash;

impl HashStrategy for QuotientHash {
    fn slot_index(&self, key: u64, size: u64) -> u64 {
        (key / size) % size
    }

    fn name(&self) -> &str {
        "quotient"
    }
}

/// Seeded FNV-1a strategy.
///
/// Two instances with different seeds give a pair of strategies that scatter
/// sequential keys far better than the modulo/quotient default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnvHash {
    seed: u64,
}

impl FnvHash {
    /// Creates a strategy mixing `seed` into every hash.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed mixed into every hash.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl HashStrategy for FnvHash {
    fn slot_index(&self, key: u64, size: u64) -> u64 {
        let mut hasher = FnvHasher::default();
        hasher.write_u64(self.seed);
        hasher.write_u64(key);
        hasher.finish() % size
    }

    fn name(&self) -> &str {
        "fnv"
    }
}

/// Seeds used by [`fnv_pair`] when none are configured.
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_FNV_SEEDS: (u64, u64) = (0x517cc1b727220a95, 0x4cf18d443988208f);

/// A boxed strategy as stored by the table.
pub type BoxedStrategy = Box<dyn HashStrategy>;

/// The default pair: [`ModuloHash`] for the first table, [`QuotientHash`] for the second.
pub fn default_pair() -> (BoxedStrategy, BoxedStrategy) {
    (Box::new(ModuloHash), Box::new(QuotientHash))
}

/// A pair of [`FnvHash`] strategies with the given seeds.
pub fn fnv_pair(first_seed: u64, second_seed: u64) -> (BoxedStrategy, BoxedStrategy) {
    (
        Box::new(FnvHash::new(first_seed)),
        Box::new(FnvHash::new(second_seed)),
    )
}

impl fmt::Debug for dyn HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashStrategy({})", self.name())
    }
}
