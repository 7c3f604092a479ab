//! Store trait: the abstract interface for item ownership.
//!
//! The store exclusively owns the collection and the id allocator. Callers
//! only ever see clones of items.

use async_trait::async_trait;
use tasklist_core::{Filter, Item, ItemId, ItemPatch};

use crate::error::Result;

/// The Store trait: async interface over an ordered item collection.
///
/// # Design Notes
///
/// - **Insertion order**: `list` returns items in the order they were created.
/// - **Monotonic ids**: ids strictly increase and are never reused, even
///   after a delete.
/// - **Atomic mutations**: each of `create`, `update` and `delete` is
///   observed either fully applied or not at all by concurrent callers.
#[async_trait]
pub trait Store: Send + Sync {
    /// Create an item from text.
    ///
    /// The text is trimmed and must be non-empty. The new item is appended
    /// with `completed = false`.
    async fn create(&self, text: &str) -> Result<Item>;

    /// All items in insertion order.
    async fn list(&self) -> Result<Vec<Item>>;

    /// Look up an item by id.
    ///
    /// Returns `StoreError::NotFound` if absent.
    async fn find_by_id(&self, id: ItemId) -> Result<Item>;

    /// Apply a patch to an item and return the updated item.
    ///
    /// Only fields present in the patch change. Supplied text is stored
    /// verbatim.
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item>;

    /// Remove an item permanently.
    async fn delete(&self, id: ItemId) -> Result<()>;

    /// Number of items.
    async fn len(&self) -> Result<usize>;

    /// Whether the collection is empty.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

/// Extension trait for common store patterns.
pub trait StoreExt: Store {
    /// List items passing `filter`, in insertion order.
    fn list_filtered(
        &self,
        filter: Filter,
    ) -> impl std::future::Future<Output = Result<Vec<Item>>> + Send;

    /// Flip an item's completed flag.
    ///
    /// Built from `find_by_id` + `update`, so it is not atomic as a whole:
    /// a concurrent toggle can interleave between the read and the write.
    fn toggle(&self, id: ItemId) -> impl std::future::Future<Output = Result<Item>> + Send;
}

impl<S: Store + ?Sized> StoreExt for S {
    async fn list_filtered(&self, filter: Filter) -> Result<Vec<Item>> {
        let items = self.list().await?;
        Ok(filter.apply(&items))
    }

    async fn toggle(&self, id: ItemId) -> Result<Item> {
        let item = self.find_by_id(id).await?;
        self.update(id, ItemPatch::new().completed(!item.completed))
            .await
    }
}
