//! Benchmarking helpers for the cuckoo table.
//!
//! Shared workload builders for the Criterion benchmarks in `benches/`.

use crate::table::{CuckooTable, CuckooTableConfig, HashScheme, Result};

/// Builds a table with `size` slots per side using the given hash scheme.
pub fn bench_table(size: u64, hash: HashScheme) -> Result<CuckooTable> {
    let config = CuckooTableConfig::new().with_size(size).with_hash(hash);
    CuckooTable::with_config(&config)
}

/// Keys spread by a multiplicative step so they do not all share low bits.
pub fn spread_keys(count: usize) -> Vec<u64> {
    (0..count as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

/// Inserts every key, returning how many were placed.
pub fn fill_table(table: &mut CuckooTable, keys: &[u64]) -> usize {
    keys.iter()
        .filter(|&&key| table.insert(key, "payload"))
        .count()
}
