//! Error types for the Tasklist core.

use thiserror::Error;

/// Validation errors for item input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Item text was missing or blank after trimming.
    #[error("Text is required")]
    EmptyText,

    /// A string could not be parsed as a positive item id.
    #[error("invalid item id: {0:?}")]
    InvalidId(String),
}
