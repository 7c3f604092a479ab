//! Store configuration and seed data.

use tasklist_core::ItemId;

/// The demo collection a fresh daemon starts with: `(text, completed)`.
pub const DEMO_ITEMS: [(&str, bool); 5] = [
    ("Learn JavaScript", true),
    ("Build a todo app", false),
    ("Master Node.js", false),
    ("Write tests", true),
    ("Deploy to production", false),
];

/// Configuration for a store instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// First id handed out by the allocator.
    pub first_id: ItemId,
    /// Initial items, created in order before any request is served.
    pub seed: Vec<(String, bool)>,
}

impl StoreConfig {
    /// Start allocating at `first_id`.
    pub fn with_first_id(mut self, first_id: ItemId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Seed the demo collection.
    pub fn with_demo_items(mut self) -> Self {
        self.seed = DEMO_ITEMS
            .iter()
            .map(|(text, completed)| (text.to_string(), *completed))
            .collect();
        self
    }

    /// Seed an arbitrary collection.
    pub fn with_seed<I, T>(mut self, seed: I) -> Self
    where
        I: IntoIterator<Item = (T, bool)>,
        T: Into<String>,
    {
        self.seed = seed.into_iter().map(|(t, c)| (t.into(), c)).collect();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            first_id: ItemId::FIRST,
            seed: Vec::new(),
        }
    }
}
