// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Stored associations and the two sides of the table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One stored association.
///
/// Entries are never modified in place; replacing the value for a key
/// replaces the whole entry in its slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    key: u64,
    value: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new<S: Into<String>>(key: u64, value: S) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// The lookup identity of this entry.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// The stored payload.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the entry, returning its key and value.
    pub fn into_parts(self) -> (u64, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key: {}, value: {}", self.key, self.value)
    }
}

/// Identifies one of the two slot arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSide {
    /// The table addressed by the first hash strategy.
    First,
    /// The table addressed by the second hash strategy.
    Second,
}

impl TableSide {
    /// Returns the opposite side.
    pub fn other(self) -> Self {
        match self {
            TableSide::First => TableSide::Second,
            TableSide::Second => TableSide::First,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            TableSide::First => "first",
            TableSide::Second => "second",
        }
    }
}

impl fmt::Display for TableSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let entry = Entry::new(13, "marek");
        assert_eq!(entry.key(), 13);
        assert_eq!(entry.value(), "marek");
        assert_eq!(entry.to_string(), "key: 13, value: marek");

        let (key, value) = entry.into_parts();
        assert_eq!(key, 13);
        assert_eq!(value, "marek");
    }

    #[test]
    fn test_side_other() {
        assert_eq!(TableSide::First.other(), TableSide::Second);
        assert_eq!(TableSide::Second.other(), TableSide::First);
        assert_eq!(TableSide::First.to_string(), "first");
    }
}
