//! # Tasklist Store
//!
//! Storage abstraction for Tasklist. Provides a trait-based interface over
//! the ordered item collection and its id allocator, with an in-memory
//! implementation.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all item operations
//! - [`StoreExt`] - Filtered listing and toggling built on [`Store`]
//! - [`MemoryStore`] - In-memory storage behind a single lock
//! - [`StoreConfig`] - Id seed and initial items
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist_store::{MemoryStore, Store, StoreExt};
//! use tasklist_core::{Filter, ItemPatch};
//!
//! async fn example() {
//!     let store = MemoryStore::new();
//!
//!     let item = store.create("Buy milk").await.unwrap();
//!     store.update(item.id, ItemPatch::new().completed(true)).await.unwrap();
//!
//!     let done = store.list_filtered(Filter::Completed).await.unwrap();
//!     assert_eq!(done.len(), 1);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Strict create, lenient update**: `create` trims and rejects blank text;
//!   `update` stores supplied text verbatim
//! - **No id reuse**: the allocator only moves forward, deletes leave no
//!   tombstones
//! - **No persistence**: state lives for the lifetime of the process

pub mod config;
pub mod error;
pub mod memory;
pub mod traits;

pub use config::{StoreConfig, DEMO_ITEMS};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{Store, StoreExt};
