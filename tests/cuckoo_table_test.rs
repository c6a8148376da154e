// Copyright (c) 2025 Cuckoo Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the cuckoo table public API.

use std::sync::{Arc, Barrier};
use std::thread;

use cuckoo_table_lib::table::{
    CuckooTable, CuckooTableConfig, CuckooTableError, Entry, HashScheme, InsertOutcome,
    SharedCuckooTable, TableSide,
};

const TABLE_SIZE: u64 = 11;

fn entry_at(table: &CuckooTable, side: TableSide, index: usize) -> Option<Entry> {
    table.slot(side, index).cloned()
}

#[test]
fn test_lookup_on_empty_table() {
    let table = CuckooTable::with_default_hash(TABLE_SIZE).unwrap();

    for key in 0..100 {
        assert!(table.lookup(key).is_none(), "Expected no entry for key {key}");
    }
}

#[test]
fn test_insert_on_empty() {
    let mut table = CuckooTable::with_default_hash(TABLE_SIZE).unwrap();
    let item = Entry::new(13, "marek");

    assert!(table.lookup(item.key()).is_none());
    assert!(table.insert(item.key(), item.value()));
    assert_eq!(table.lookup(item.key()), Some(item));
}

#[test]
fn test_insert_with_colliding_first_hash() {
    let mut table = CuckooTable::with_default_hash(TABLE_SIZE).unwrap();
    let three = Entry::new(3, "three");
    let thirty_six = Entry::new(36, "thirty six");

    let (first_of_three, _) = table.candidate_slots(three.key()).unwrap();
    let (first_of_36, second_of_36) = table.candidate_slots(thirty_six.key()).unwrap();
    assert_eq!(first_of_three, first_of_36, "keys must collide in the first table");
    assert_eq!(first_of_three, second_of_36);

    table.insert(three.key(), three.value());
    table.insert(thirty_six.key(), thirty_six.value());

    assert_eq!(table.lookup(3), Some(three));
    assert_eq!(table.lookup(36), Some(thirty_six));
}

/// Key  First Second
/// 105  6     9
/// 3    3     0
/// 36   3     3
/// 39   6     3
///
/// 105 starts in first[6]; inserting 39 pushes it to second[9].
#[test]
fn test_insert_with_eviction() {
    let mut table = CuckooTable::with_default_hash(TABLE_SIZE).unwrap();
    let items = [
        Entry::new(105, "hundred and five"),
        Entry::new(3, "three"),
        Entry::new(36, "thirty six"),
        Entry::new(39, "thirty nine"),
    ];

    for item in &items[..3] {
        assert!(table.insert(item.key(), item.value()));
    }
    assert_eq!(entry_at(&table, TableSide::First, 6), Some(items[0].clone()));

    assert_eq!(
        table.try_insert(39, "thirty nine"),
        Ok(InsertOutcome::Displaced {
            side: TableSide::First,
            moved: 1
        })
    );

    for item in &items {
        assert_eq!(table.lookup(item.key()).as_ref(), Some(item));
    }

    assert_eq!(entry_at(&table, TableSide::First, 3), Some(items[1].clone()));
    assert_eq!(entry_at(&table, TableSide::First, 6), Some(items[3].clone()));
    assert_eq!(entry_at(&table, TableSide::Second, 3), Some(items[2].clone()));
    assert_eq!(entry_at(&table, TableSide::Second, 9), Some(items[0].clone()));
    assert_eq!(table.len(), 4);
}

#[test]
fn test_lookup_absent_after_population() {
    let mut table = CuckooTable::with_default_hash(TABLE_SIZE).unwrap();

    for (key, value) in [(3, "three"), (36, "thirty six"), (39, "thirty nine"), (105, "hundred and five")] {
        assert!(table.insert(key, value));
    }

    assert!(table.lookup(1).is_none());
}

#[test]
fn test_delete_never_removes() {
    let mut table = CuckooTable::with_default_hash(TABLE_SIZE).unwrap();
    table.insert(39, "thirty nine");

    for key in [39, 40, 0] {
        let before = table.lookup(key);
        assert!(!table.delete(key));
        assert_eq!(table.lookup(key), before);
    }
    assert!(matches!(
        table.try_delete(39),
        Err(CuckooTableError::Unsupported(_))
    ));
}

#[test]
fn test_zero_size_is_configuration_error() {
    let err = CuckooTable::with_default_hash(0).unwrap_err();
    assert!(matches!(err, CuckooTableError::InvalidConfiguration(_)));
}

#[test]
fn test_custom_strategies_force_collisions() {
    // Every key collides in both tables: the third distinct key cannot fit.
    let mut table = CuckooTable::new(TABLE_SIZE, |_: u64, _: u64| -> u64 { 0 }, |_: u64, _: u64| -> u64 { 0 })
        .unwrap();

    assert_eq!(table.try_insert(1, "a"), Ok(InsertOutcome::Placed(TableSide::First)));
    assert_eq!(table.try_insert(2, "b"), Ok(InsertOutcome::Placed(TableSide::Second)));
    assert_eq!(table.try_insert(1, "c"), Ok(InsertOutcome::Replaced(TableSide::First)));
    assert!(matches!(
        table.try_insert(3, "d"),
        Err(CuckooTableError::TableFull { key: 3, .. })
    ));

    assert_eq!(table.get(1), Some("c"));
    assert_eq!(table.get(2), Some("b"));
    assert!(table.lookup(3).is_none());
}

#[test]
fn test_dump_marks_empty_slots() {
    let mut table = CuckooTable::with_default_hash(TABLE_SIZE).unwrap();
    table.insert(105, "hundred and five");

    let dump = table.dump();
    assert!(dump.starts_with("first:\n0: empty\n"));
    assert!(dump.contains("6: key: 105, value: hundred and five\n"));
    assert!(dump.contains("second:\n"));
    assert_eq!(dump.matches("empty").count(), 21);
}

#[test]
fn test_shared_table_across_threads() {
    let config = CuckooTableConfig::new()
        .with_size(256)
        .with_hash(HashScheme::fnv());
    let table = SharedCuckooTable::with_config(&config).unwrap();
    let thread_count = 8;
    let items_per_thread = 20;
    let barrier = Arc::new(Barrier::new(thread_count));

    let handles: Vec<_> = (0..thread_count)
        .map(|t| {
            let table = table.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..items_per_thread {
                    let key = (t * 1_000 + i) as u64;
                    table.insert(key, format!("thread_{t}_item_{i}"));
                    // Readers only ever see complete entries.
                    if let Some(entry) = table.lookup(key) {
                        assert_eq!(entry.value(), format!("thread_{t}_item_{i}"));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stored = table.read(|t| t.iter().count());
    assert_eq!(stored, table.len());
    assert!(!table.is_empty());
}
