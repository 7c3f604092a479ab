//! # Tasklist Testkit
//!
//! Testing utilities for Tasklist.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: stores pre-seeded with known items
//! - **Generators**: proptest strategies for item text, patches and
//!   operation sequences
//! - **Model**: a plain reference model of the store to check
//!   implementations against
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tasklist_testkit::generators::store_ops;
//! use tasklist_testkit::Model;
//!
//! proptest! {
//!     #[test]
//!     fn ids_never_reused(ops in store_ops(64)) {
//!         let mut model = Model::new();
//!         for op in &ops {
//!             model.apply(op);
//!         }
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tasklist_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_flags(&[true, false, false]);
//! assert_eq!(fixture.seeded, 3);
//! ```

pub mod fixtures;
pub mod generators;
pub mod model;

pub use fixtures::{ids, TestFixture};
pub use generators::{item_patch, item_text, store_ops, StoreOp};
pub use model::{apply_to_store, Model, OpResult};
