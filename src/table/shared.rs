// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! A lock-guarded handle for sharing one table between threads.
//!
//! Displacement rewrites slots in both tables at once, so the whole table sits
//! behind a single `RwLock`: mutations hold the write lock for their full
//! duration and readers never see a half-applied chain.

use std::sync::Arc;

use parking_lot::RwLock;

use super::config::CuckooTableConfig;
use super::cuckoo::{CuckooTable, InsertOutcome};
use super::entry::Entry;
use super::error::Result;

/// Cloneable, thread-safe handle to a [`CuckooTable`].
///
/// Clones share the same underlying table.
#[derive(Debug, Clone)]
pub struct SharedCuckooTable {
    inner: Arc<RwLock<CuckooTable>>,
}

impl SharedCuckooTable {
    /// Wraps an existing table.
    pub fn new(table: CuckooTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Builds a table from `config` and wraps it.
    pub fn with_config(config: &CuckooTableConfig) -> Result<Self> {
        CuckooTable::with_config(config).map(Self::new)
    }

    /// See [`CuckooTable::insert`].
    pub fn insert<S: Into<String>>(&self, key: u64, value: S) -> bool {
        self.inner.write().insert(key, value)
    }

    /// See [`CuckooTable::try_insert`].
    pub fn try_insert<S: Into<String>>(&self, key: u64, value: S) -> Result<InsertOutcome> {
        self.inner.write().try_insert(key, value)
    }

    /// Returns a copy of the entry stored under `key`.
    pub fn lookup(&self, key: u64) -> Option<Entry> {
        self.inner.read().lookup(key)
    }

    /// See [`CuckooTable::contains_key`].
    pub fn contains_key(&self, key: u64) -> bool {
        self.inner.read().contains_key(key)
    }

    /// See [`CuckooTable::delete`].
    pub fn delete(&self, key: u64) -> bool {
        self.inner.write().delete(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// See [`CuckooTable::dump`].
    pub fn dump(&self) -> String {
        self.inner.read().dump()
    }

    /// Runs `f` with shared access to the table.
    pub fn read<R>(&self, f: impl FnOnce(&CuckooTable) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the table.
    ///
    /// Use this to make several operations atomic with respect to other handles.
    pub fn write<R>(&self, f: impl FnOnce(&mut CuckooTable) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<CuckooTable> for SharedCuckooTable {
    fn from(table: CuckooTable) -> Self {
        Self::new(table)
    }
}
