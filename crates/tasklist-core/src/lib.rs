//! # Tasklist Core
//!
//! Pure primitives for Tasklist: items, patches, status filters, and the
//! client view model.
//!
//! This crate contains no I/O, no storage, no networking.
//!
//! ## Key Types
//!
//! - [`Item`] - A task-list entry: id, text, completed flag
//! - [`ItemId`] - Positive, never-reused identifier
//! - [`ItemPatch`] - Partial update; omitted fields stay unchanged
//! - [`Filter`] - `all` / `active` / `completed` selection
//!
//! ## Filtering
//!
//! ```rust
//! use tasklist_core::{apply_filter, Item, ItemId};
//!
//! let items = vec![
//!     Item::new(ItemId(1), "Write tests").with_completed(true),
//!     Item::new(ItemId(2), "Ship it"),
//! ];
//! let active = apply_filter(&items, Some("active"));
//! assert_eq!(active.len(), 1);
//! assert_eq!(active[0].id, ItemId(2));
//! ```

pub mod error;
pub mod filter;
pub mod item;
pub mod types;
pub mod validation;
pub mod view;

pub use error::ValidationError;
pub use filter::{apply_filter, Filter};
pub use item::{Item, ItemPatch};
pub use types::ItemId;
pub use validation::{validate_required_text, validate_text};
pub use view::{render, Banner, BannerKind, ListView, RowView};
