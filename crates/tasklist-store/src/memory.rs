//! In-memory implementation of the Store trait.
//!
//! Everything is lost when the store is dropped. The collection and the id
//! counter sit behind a single lock, so every mutation is serialized.

use async_trait::async_trait;
use tokio::sync::RwLock;

use tasklist_core::{validate_text, Item, ItemId, ItemPatch, ValidationError};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::traits::Store;

/// In-memory store implementation.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    /// Items in insertion order.
    items: Vec<Item>,

    /// Next id to hand out. Only ever increases.
    next_id: ItemId,
}

impl MemoryStoreInner {
    fn allocate_id(&mut self) -> Result<ItemId> {
        let id = self.next_id;
        self.next_id = id.next().ok_or(StoreError::IdsExhausted)?;
        Ok(id)
    }

    fn position(&self, id: ItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn push(&mut self, text: String, completed: bool) -> Result<Item> {
        let id = self.allocate_id()?;
        let item = Item::new(id, text).with_completed(completed);
        self.items.push(item.clone());
        Ok(item)
    }
}

impl MemoryStore {
    /// Create a new empty store allocating from id 1.
    pub fn new() -> Self {
        Self::from_inner(MemoryStoreInner {
            items: Vec::new(),
            next_id: ItemId::FIRST,
        })
    }

    /// Create a store from configuration, seeding any initial items.
    ///
    /// Seed text goes through the same validation as `create`.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        if config.first_id.get() == 0 {
            return Err(ValidationError::InvalidId(config.first_id.to_string()).into());
        }

        let mut inner = MemoryStoreInner {
            items: Vec::with_capacity(config.seed.len()),
            next_id: config.first_id,
        };
        for (text, completed) in config.seed {
            let text = validate_text(&text)?;
            inner.push(text, completed)?;
        }

        tracing::debug!(
            seeded = inner.items.len(),
            next_id = %inner.next_id,
            "memory store initialized"
        );
        Ok(Self::from_inner(inner))
    }

    fn from_inner(inner: MemoryStoreInner) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// The id the next `create` will receive.
    pub async fn next_id(&self) -> ItemId {
        self.inner.read().await.next_id
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create(&self, text: &str) -> Result<Item> {
        let text = validate_text(text)?;

        let mut inner = self.inner.write().await;
        let item = inner.push(text, false)?;

        tracing::debug!(id = %item.id, "item created");
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let inner = self.inner.read().await;
        Ok(inner.items.clone())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Item> {
        let inner = self.inner.read().await;
        let index = inner.position(id)?;
        Ok(inner.items[index].clone())
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        let item = &mut inner.items[index];
        item.apply(&patch);

        tracing::debug!(
            id = %id,
            text = patch.text.is_some(),
            completed = ?patch.completed,
            "item updated"
        );
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        // `Vec::remove` shifts the tail, keeping insertion order.
        inner.items.remove(index);

        tracing::debug!(id = %id, "item deleted");
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let inner = self.inner.read().await;
        Ok(inner.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEMO_ITEMS;
    use crate::traits::StoreExt;
    use std::sync::Arc;
    use tasklist_core::Filter;

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id.get()).collect()
    }

    #[tokio::test]
    async fn test_create_first_item() {
        let store = MemoryStore::new();

        let item = store.create("Buy milk").await.unwrap();
        assert_eq!(item, Item::new(ItemId(1), "Buy milk"));

        let err = store.create("").await.unwrap_err();
        assert_eq!(err, StoreError::Validation(ValidationError::EmptyText));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_trims_text() {
        let store = MemoryStore::new();
        let item = store.create("  padded  ").await.unwrap();
        assert_eq!(item.text, "padded");
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_id() {
        let store = MemoryStore::new();
        store.create("   ").await.unwrap_err();
        let item = store.create("real").await.unwrap();
        assert_eq!(item.id, ItemId(1));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = MemoryStore::new();
        for text in ["c", "a", "b"] {
            store.create(text).await.unwrap();
        }
        let texts: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.text)
            .collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let store = MemoryStore::new();
        let err = store
            .update(ItemId(99), ItemPatch::new().completed(true))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(ItemId(99)));
    }

    #[tokio::test]
    async fn test_update_round_trip_completed() {
        let store = MemoryStore::new();
        let original = store.create("Walk dog").await.unwrap();

        let done = store
            .update(original.id, ItemPatch::new().completed(true))
            .await
            .unwrap();
        assert!(done.completed);

        let undone = store
            .update(original.id, ItemPatch::new().completed(false))
            .await
            .unwrap();
        assert_eq!(undone, original);
    }

    #[tokio::test]
    async fn test_update_accepts_empty_text() {
        let store = MemoryStore::new();
        let item = store.create("x").await.unwrap();
        let updated = store.update(item.id, ItemPatch::new().text("")).await.unwrap();
        assert_eq!(updated.text, "");
        assert_eq!(store.find_by_id(item.id).await.unwrap().text, "");
    }

    #[tokio::test]
    async fn test_delete_closes_gap_and_never_reuses_ids() {
        let store = MemoryStore::new();
        for text in ["one", "two", "three"] {
            store.create(text).await.unwrap();
        }

        store.delete(ItemId(2)).await.unwrap();
        assert_eq!(ids(&store.list().await.unwrap()), vec![1, 3]);

        let err = store.find_by_id(ItemId(2)).await.unwrap_err();
        assert!(err.is_not_found());

        let next = store.create("four").await.unwrap();
        assert_eq!(next.id, ItemId(4));
    }

    #[tokio::test]
    async fn test_delete_missing_item() {
        let store = MemoryStore::new();
        assert_eq!(
            store.delete(ItemId(1)).await.unwrap_err(),
            StoreError::NotFound(ItemId(1))
        );
    }

    #[tokio::test]
    async fn test_delete_last_item_keeps_counter() {
        let store = MemoryStore::new();
        let item = store.create("only").await.unwrap();
        store.delete(item.id).await.unwrap();
        assert!(store.is_empty().await.unwrap());
        assert_eq!(store.next_id().await, ItemId(2));
    }

    #[tokio::test]
    async fn test_demo_seed() {
        let store = MemoryStore::with_config(StoreConfig::default().with_demo_items()).unwrap();
        let items = store.list().await.unwrap();

        assert_eq!(items.len(), DEMO_ITEMS.len());
        assert_eq!(ids(&items), vec![1, 2, 3, 4, 5]);
        assert!(items[0].completed);
        assert_eq!(store.create("next").await.unwrap().id, ItemId(6));
    }

    #[tokio::test]
    async fn test_custom_first_id() {
        let config = StoreConfig::default().with_first_id(ItemId(100));
        let store = MemoryStore::with_config(config).unwrap();
        assert_eq!(store.create("a").await.unwrap().id, ItemId(100));
        assert_eq!(store.create("b").await.unwrap().id, ItemId(101));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let zero = StoreConfig::default().with_first_id(ItemId(0));
        assert!(MemoryStore::with_config(zero).is_err());

        let blank = StoreConfig::default().with_seed([("  ", false)]);
        assert!(matches!(
            MemoryStore::with_config(blank),
            Err(StoreError::Validation(ValidationError::EmptyText))
        ));
    }

    #[tokio::test]
    async fn test_ids_exhausted() {
        let config = StoreConfig::default().with_first_id(ItemId(u64::MAX));
        let store = MemoryStore::with_config(config).unwrap();
        assert_eq!(store.create("last").await.unwrap_err(), StoreError::IdsExhausted);
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_list_filtered_and_toggle() {
        let store = MemoryStore::new();
        for text in ["a", "b", "c"] {
            store.create(text).await.unwrap();
        }

        let toggled = store.toggle(ItemId(1)).await.unwrap();
        assert!(toggled.completed);

        let active = store.list_filtered(Filter::Active).await.unwrap();
        assert_eq!(ids(&active), vec![2, 3]);

        let completed = store.list_filtered(Filter::Completed).await.unwrap();
        assert_eq!(ids(&completed), vec![1]);

        assert!(!store.toggle(ItemId(1)).await.unwrap().completed);
        assert!(store.toggle(ItemId(42)).await.unwrap_err().is_not_found());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(&format!("task {}", i)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut seen = ids(&store.list().await.unwrap());
        seen.sort_unstable();
        assert_eq!(seen, (1..=64).collect::<Vec<_>>());
    }
}
