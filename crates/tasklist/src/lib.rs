//! # Tasklist
//!
//! The unified API for Tasklist: a minimal task-list server with status
//! filtering over an in-memory item collection.
//!
//! ## Overview
//!
//! - **Items**: short text entries with a `completed` flag and a positive id
//! - **Store**: owns the ordered collection and the id allocator
//! - **Filters**: `all`, `active`, `completed` views over the collection
//! - **Handlers**: map requests onto store calls and response outcomes
//!
//! ## Key Concepts
//!
//! - **Ids are never reused**: the allocator only moves forward.
//! - **Insertion order** is the display order.
//! - **Creation is strict, updates are lenient**: new text is trimmed and
//!   must be non-empty, patched text is stored as given.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::{App, AppConfig};
//!
//! async fn example() {
//!     let app = App::new(AppConfig::from_env().unwrap()).unwrap();
//!     app.run(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await
//!     .unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `tasklist::core` - Items, patches, filters, view model
//! - `tasklist::store` - Store trait and in-memory store
//! - `tasklist::http` - Request handlers and HTTP transport

pub mod app;
pub mod config;
pub mod error;

// Re-export component crates
pub use tasklist_core as core;
pub use tasklist_http as http;
pub use tasklist_store as store;

// Re-export main types for convenience
pub use app::App;
pub use config::AppConfig;
pub use error::{Result, TaskListError};

pub use tasklist_core::{apply_filter, Filter, Item, ItemId, ItemPatch, ValidationError};
pub use tasklist_http::{Handlers, Outcome, ServerConfig};
pub use tasklist_store::{MemoryStore, Store, StoreConfig, StoreError, StoreExt};
