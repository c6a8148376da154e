// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fixed-capacity cuckoo hash table.
//!
//! Two slot arrays of equal, fixed size, each addressed by its own hash
//! strategy. A key lives in exactly one of its two candidate slots, so lookups
//! cost two probes regardless of occupancy.
//!
//! # Example
//!
//! ```
//! use cuckoo_table_lib::table::{CuckooTable, CuckooTableConfig, CuckooTableError, HashScheme};
//!
//! // Default strategies: key mod size, (key div size) mod size
//! let mut table = CuckooTable::with_default_hash(11).unwrap();
//! assert!(table.insert(3, "three"));
//! assert_eq!(table.get(3), Some("three"));
//!
//! // A one-slot table fills up after two keys
//! let mut tiny = CuckooTable::with_default_hash(1).unwrap();
//! tiny.insert(1, "one");
//! tiny.insert(2, "two");
//! assert!(matches!(tiny.try_insert(3, "three"), Err(CuckooTableError::TableFull { .. })));
//!
//! // Configured tables can use seeded FNV strategies instead
//! let config = CuckooTableConfig::new().with_size(64).with_hash(HashScheme::fnv());
//! let table = CuckooTable::with_config(&config).unwrap();
//! assert!(table.is_empty());
//! ```
//!
//! # Displacement
//!
//! When both candidate slots of a new key are occupied, the occupant of the
//! first candidate is pushed to its alternate slot in the second table, whose
//! occupant in turn is pushed back to the first table, and so on until a free
//! slot is reached. If that chain loops or exceeds the displacement limit, the
//! same is tried starting from the occupant of the second candidate. Failing
//! both, the insert reports [`CuckooTableError::TableFull`] and the table is
//! left exactly as it was.
//!
//! # Limitations
//!
//! The table never resizes, and entries cannot be removed:
//! [`CuckooTable::delete`] always returns `false`.

mod config;
mod cuckoo;
mod entry;
mod error;
pub mod hash;
mod shared;

pub use config::{
    derived_max_displacements, CuckooTableConfig, HashScheme, DISPLACEMENT_LOG_FACTOR,
    MIN_DISPLACEMENTS,
};
pub use cuckoo::{CuckooTable, InsertOutcome};
pub use entry::{Entry, TableSide};
pub use error::{CuckooTableError, Result};
pub use hash::{FnvHash, HashStrategy, ModuloHash, QuotientHash};
pub use shared::SharedCuckooTable;
