// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the two-table cuckoo hash table.
//!
//! Every key has exactly two candidate slots: `first[h1(key)]` and
//! `second[h2(key)]`. Inserts that find both occupied displace an occupant into
//! its own alternate slot, following the chain of displaced entries until a free
//! slot turns up. The chain is planned without touching the table and applied
//! only once a free slot has been found.

use std::fmt;

use tracing::{debug, trace, warn};

use super::config::CuckooTableConfig;
use super::entry::{Entry, TableSide};
use super::error::{CuckooTableError, Result};
use super::hash::{self, BoxedStrategy, HashStrategy};

/// How a successful insert placed its entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new and its candidate slot on `side` was empty.
    Placed(TableSide),
    /// The key was already stored on `side`; its value was replaced in place.
    Replaced(TableSide),
    /// The key was new and took the candidate slot on `side` after `moved`
    /// existing entries were shifted to their alternate slots.
    Displaced {
        /// The side the new entry landed on
        side: TableSide,
        /// Number of existing entries relocated
        moved: usize,
    },
}

impl InsertOutcome {
    /// The side the inserted entry ended up on.
    pub fn side(&self) -> TableSide {
        match *self {
            InsertOutcome::Placed(side) | InsertOutcome::Replaced(side) => side,
            InsertOutcome::Displaced { side, .. } => side,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotRef {
    side: TableSide,
    index: usize,
}

/// Result of planning one displacement chain.
#[derive(Debug)]
enum Walk {
    /// Occupants of every slot but the last move one step along the path; the
    /// last slot is free.
    Reaches(Vec<SlotRef>),
    /// The chain hit the displacement limit or looped back on itself.
    Blocked { steps: usize },
}

/// A fixed-capacity associative table using two-choice (cuckoo) hashing.
///
/// Both tables hold `size` slots and never grow. Lookups probe exactly two
/// slots. The table is not synchronized; see
/// [`SharedCuckooTable`](super::SharedCuckooTable) for concurrent callers.
///
/// # Examples
///
/// ```
/// use cuckoo_table_lib::table::{CuckooTable, TableSide};
///
/// let mut table = CuckooTable::with_default_hash(11).unwrap();
/// for (key, value) in [(105, "hundred and five"), (3, "three"), (36, "thirty six"), (39, "thirty nine")] {
///     assert!(table.insert(key, value));
/// }
///
/// // 39 pushed 105 out of first[6] into its alternate slot second[9].
/// assert_eq!(table.slot(TableSide::First, 6).map(|e| e.key()), Some(39));
/// assert_eq!(table.slot(TableSide::Second, 9).map(|e| e.key()), Some(105));
/// assert_eq!(table.get(105), Some("hundred and five"));
/// assert!(table.lookup(1).is_none());
/// ```
pub struct CuckooTable {
    size: u64,
    first: Vec<Option<Entry>>,
    second: Vec<Option<Entry>>,
    first_hash: BoxedStrategy,
    second_hash: BoxedStrategy,
    max_displacements: usize,
    len: usize,
}

impl CuckooTable {
    /// Creates a table with `size` slots per side and the given strategies.
    ///
    /// # Errors
    ///
    /// Returns [`CuckooTableError::InvalidConfiguration`] if `size` is zero.
    pub fn new<H1, H2>(size: u64, first_hash: H1, second_hash: H2) -> Result<Self>
    where
        H1: HashStrategy + 'static,
        H2: HashStrategy + 'static,
    {
        let config = CuckooTableConfig::new().with_size(size);
        Self::from_parts(&config, Box::new(first_hash), Box::new(second_hash))
    }

    /// Creates a table using `key mod size` and `(key div size) mod size`.
    ///
    /// # Errors
    ///
    /// Returns [`CuckooTableError::InvalidConfiguration`] if `size` is zero.
    pub fn with_default_hash(size: u64) -> Result<Self> {
        let config = CuckooTableConfig::new().with_size(size);
        Self::with_config(&config)
    }

    /// Creates a table from a configuration, including its hash scheme.
    pub fn with_config(config: &CuckooTableConfig) -> Result<Self> {
        let (first_hash, second_hash) = config.hash.strategies();
        Self::from_parts(config, first_hash, second_hash)
    }

    /// Creates a table from a configuration, overriding its hash scheme with
    /// explicit strategies.
    pub fn with_strategies<H1, H2>(
        config: &CuckooTableConfig,
        first_hash: H1,
        second_hash: H2,
    ) -> Result<Self>
    where
        H1: HashStrategy + 'static,
        H2: HashStrategy + 'static,
    {
        Self::from_parts(config, Box::new(first_hash), Box::new(second_hash))
    }

    fn from_parts(
        config: &CuckooTableConfig,
        first_hash: BoxedStrategy,
        second_hash: BoxedStrategy,
    ) -> Result<Self> {
        config.validate()?;
        let slots = usize::try_from(config.size).map_err(|_| {
            CuckooTableError::InvalidConfiguration(format!(
                "size {} exceeds the addressable range",
                config.size
            ))
        })?;

        debug!(
            size = config.size,
            first_hash = first_hash.name(),
            second_hash = second_hash.name(),
            max_displacements = config.effective_max_displacements(),
            "Creating cuckoo table"
        );

        Ok(Self {
            size: config.size,
            first: vec![None; slots],
            second: vec![None; slots],
            first_hash,
            second_hash,
            max_displacements: config.effective_max_displacements(),
            len: 0,
        })
    }

    /// Number of slots in each of the two tables.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Total number of slots across both tables.
    pub fn capacity(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fraction of occupied slots across both tables.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Maximum number of entries a single displacement chain may move.
    pub fn max_displacements(&self) -> usize {
        self.max_displacements
    }

    /// Inserts `value` under `key`, returning `true` on success.
    ///
    /// This is [`try_insert`](Self::try_insert) with the failure cause dropped.
    pub fn insert<S: Into<String>>(&mut self, key: u64, value: S) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Inserts `value` under `key`.
    ///
    /// An entry already stored under `key` is replaced in place. Otherwise the
    /// entry goes into the first empty candidate slot, `first[h1]` before
    /// `second[h2]`. When both are occupied the occupant of `first[h1]` is
    /// displaced, then, failing that, the occupant of `second[h2]`.
    ///
    /// # Errors
    ///
    /// * [`CuckooTableError::TableFull`] if neither displacement chain reaches
    ///   a free slot within the displacement limit. The table is left unchanged.
    /// * [`CuckooTableError::HashOutOfRange`] if a strategy returns an index
    ///   outside the table. The table is left unchanged.
    pub fn try_insert<S: Into<String>>(&mut self, key: u64, value: S) -> Result<InsertOutcome> {
        let first = SlotRef {
            side: TableSide::First,
            index: self.index(TableSide::First, key)?,
        };
        let second = SlotRef {
            side: TableSide::Second,
            index: self.index(TableSide::Second, key)?,
        };
        let entry = Entry::new(key, value);

        for slot in [first, second] {
            if self.holds_key(slot, key) {
                self.put(slot, entry);
                debug!(key, side = %slot.side, index = slot.index, "Replaced existing entry");
                return Ok(InsertOutcome::Replaced(slot.side));
            }
        }

        for slot in [first, second] {
            if self.entry_at(slot).is_none() {
                self.put(slot, entry);
                self.len += 1;
                debug!(key, side = %slot.side, index = slot.index, "Placed entry in empty slot");
                return Ok(InsertOutcome::Placed(slot.side));
            }
        }

        let mut attempted = 0;
        for slot in [first, second] {
            match self.plan_displacement(slot)? {
                Walk::Reaches(path) => {
                    let moved = path.len() - 1;
                    self.commit(&path, entry);
                    self.len += 1;
                    debug!(key, side = %slot.side, index = slot.index, moved, "Placed entry after displacement");
                    return Ok(InsertOutcome::Displaced {
                        side: slot.side,
                        moved,
                    });
                }
                Walk::Blocked { steps } => {
                    trace!(key, side = %slot.side, steps, "Displacement chain blocked");
                    attempted += steps;
                }
            }
        }

        warn!(key, attempted, len = self.len, "Cuckoo table full for key");
        Err(CuckooTableError::TableFull { key, attempted })
    }

    /// Returns a copy of the entry stored under `key`, if any.
    ///
    /// Probes `first[h1(key)]` then `second[h2(key)]` and nothing else.
    pub fn lookup(&self, key: u64) -> Option<Entry> {
        self.find(key).cloned()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: u64) -> Option<&str> {
        self.find(key).map(Entry::value)
    }

    /// Returns `true` if an entry is stored under `key`.
    pub fn contains_key(&self, key: u64) -> bool {
        self.find(key).is_some()
    }

    /// Removal is not provided: always returns `false` and leaves the table
    /// untouched, whether or not `key` is stored.
    pub fn delete(&mut self, key: u64) -> bool {
        debug!(key, "Delete requested; removal is not supported");
        false
    }

    /// Like [`delete`](Self::delete), but reports the missing capability.
    ///
    /// # Errors
    ///
    /// Always returns [`CuckooTableError::Unsupported`].
    pub fn try_delete(&mut self, key: u64) -> Result<()> {
        debug!(key, "Delete requested; removal is not supported");
        Err(CuckooTableError::Unsupported("delete"))
    }

    /// Returns the entry in slot `index` of the given side.
    ///
    /// Returns `None` for empty slots and out-of-range indices.
    pub fn slot(&self, side: TableSide, index: usize) -> Option<&Entry> {
        self.slots(side).get(index).and_then(Option::as_ref)
    }

    /// The two candidate slot indices for `key`: `(h1, h2)`.
    pub fn candidate_slots(&self, key: u64) -> Result<(usize, usize)> {
        Ok((
            self.index(TableSide::First, key)?,
            self.index(TableSide::Second, key)?,
        ))
    }

    /// Iterates over occupied slots, first table then second, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (TableSide, usize, &Entry)> + '_ {
        [TableSide::First, TableSide::Second]
            .into_iter()
            .flat_map(move |side| {
                self.slots(side)
                    .iter()
                    .enumerate()
                    .filter_map(move |(index, slot)| slot.as_ref().map(|entry| (side, index, entry)))
            })
    }

    /// Renders both tables index by index, showing empty slots as `empty`.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn find(&self, key: u64) -> Option<&Entry> {
        for side in [TableSide::First, TableSide::Second] {
            let index = match self.index(side, key) {
                Ok(index) => index,
                Err(err) => {
                    warn!(%err, "Ignoring out-of-range hash during lookup");
                    continue;
                }
            };
            trace!(key, side = %side, index, "Probing slot");
            if let Some(entry) = self.slots(side)[index].as_ref().filter(|e| e.key() == key) {
                return Some(entry);
            }
        }
        None
    }

    fn index(&self, side: TableSide, key: u64) -> Result<usize> {
        let strategy = match side {
            TableSide::First => &self.first_hash,
            TableSide::Second => &self.second_hash,
        };
        let index = strategy.slot_index(key, self.size);
        if index >= self.size {
            return Err(CuckooTableError::HashOutOfRange {
                side,
                key,
                index,
                size: self.size,
            });
        }
        // index < size and size fits in usize, checked at construction
        Ok(index as usize)
    }

    fn slots(&self, side: TableSide) -> &[Option<Entry>] {
        match side {
            TableSide::First => &self.first,
            TableSide::Second => &self.second,
        }
    }

    fn slots_mut(&mut self, side: TableSide) -> &mut [Option<Entry>] {
        match side {
            TableSide::First => &mut self.first,
            TableSide::Second => &mut self.second,
        }
    }

    fn entry_at(&self, slot: SlotRef) -> Option<&Entry> {
        self.slots(slot.side)[slot.index].as_ref()
    }

    fn holds_key(&self, slot: SlotRef, key: u64) -> bool {
        self.entry_at(slot).is_some_and(|entry| entry.key() == key)
    }

    fn put(&mut self, slot: SlotRef, entry: Entry) {
        self.slots_mut(slot.side)[slot.index] = Some(entry);
    }

    /// Follows the chain of displacements starting with the occupant of `start`.
    ///
    /// Each occupant on the chain would move to its candidate slot on the other
    /// side. Reads only.
    fn plan_displacement(&self, start: SlotRef) -> Result<Walk> {
        let mut path = vec![start];

        loop {
            let current = path[path.len() - 1];
            let occupant = match self.entry_at(current) {
                Some(entry) => entry.key(),
                None => return Ok(Walk::Reaches(path)),
            };

            let side = current.side.other();
            let next = SlotRef {
                side,
                index: self.index(side, occupant)?,
            };

            if self.entry_at(next).is_none() {
                path.push(next);
                return Ok(Walk::Reaches(path));
            }

            if path.contains(&next) || path.len() >= self.max_displacements {
                return Ok(Walk::Blocked { steps: path.len() });
            }

            path.push(next);
        }
    }

    /// Shifts every occupant one step along `path` and stores `entry` in the
    /// head slot.
    fn commit(&mut self, path: &[SlotRef], entry: Entry) {
        for step in path.windows(2).rev() {
            let moved = self.slots_mut(step[0].side)[step[0].index].take();
            trace!(from_side = %step[0].side, from = step[0].index, to_side = %step[1].side, to = step[1].index, "Displacing entry");
            self.slots_mut(step[1].side)[step[1].index] = moved;
        }
        self.put(path[0], entry);
    }
}

impl fmt::Display for CuckooTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in [TableSide::First, TableSide::Second] {
            writeln!(f, "{side}:")?;
            for (index, slot) in self.slots(side).iter().enumerate() {
                match slot {
                    Some(entry) => writeln!(f, "{index}: {entry}")?,
                    None => writeln!(f, "{index}: empty")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CuckooTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CuckooTable")
            .field("size", &self.size)
            .field("len", &self.len)
            .field("max_displacements", &self.max_displacements)
            .field("first_hash", &self.first_hash)
            .field("second_hash", &self.second_hash)
            .finish()
    }
}

impl Default for CuckooTable {
    fn default() -> Self {
        let config = CuckooTableConfig::default();
        let (first_hash, second_hash) = hash::default_pair();
        Self {
            size: config.size,
            first: vec![None; config.size as usize],
            second: vec![None; config.size as usize],
            first_hash,
            second_hash,
            max_displacements: config.effective_max_displacements(),
            len: 0,
        }
    }
}
