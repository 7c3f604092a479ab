//! Error types for the store module.

use tasklist_core::{ItemId, ValidationError};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item has the given id.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Input was rejected before touching the collection.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The id allocator ran out of values.
    #[error("item id space exhausted")]
    IdsExhausted,
}

impl StoreError {
    /// True for the not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
