//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use tasklist_core::{Item, ItemId};
use tasklist_store::{MemoryStore, StoreConfig, DEMO_ITEMS};

/// A test fixture wrapping a seeded memory store.
pub struct TestFixture {
    pub store: MemoryStore,
    /// Number of items the store started with.
    pub seeded: usize,
}

impl TestFixture {
    /// An empty store allocating from id 1.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            seeded: 0,
        }
    }

    /// A store holding the five demo items, ids 1 through 5.
    pub fn demo() -> Self {
        Self::with_items(&DEMO_ITEMS)
    }

    /// A store seeded with `(text, completed)` pairs, ids from 1.
    ///
    /// Panics on blank text; fixtures are for known-good input.
    pub fn with_items(items: &[(&str, bool)]) -> Self {
        let config = StoreConfig::default().with_seed(items.iter().copied());
        Self {
            store: MemoryStore::with_config(config).expect("fixture items must be valid"),
            seeded: items.len(),
        }
    }

    /// A store seeded with items named `Task 1`, `Task 2`, ... carrying the
    /// given completed flags.
    pub fn with_flags(flags: &[bool]) -> Self {
        let items: Vec<(String, bool)> = flags
            .iter()
            .enumerate()
            .map(|(i, done)| (format!("Task {}", i + 1), *done))
            .collect();
        let borrowed: Vec<(&str, bool)> = items.iter().map(|(t, d)| (t.as_str(), *d)).collect();
        Self::with_items(&borrowed)
    }

    /// The ids the seeded items received.
    pub fn seeded_ids(&self) -> Vec<ItemId> {
        (1..=self.seeded as u64).map(ItemId::new).collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw ids of `items`, in order.
pub fn ids(items: &[Item]) -> Vec<u64> {
    items.iter().map(|i| i.id.get()).collect()
}
