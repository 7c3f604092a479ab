//! Error types for Tasklist.

use tasklist_http::HttpError;
use tasklist_store::StoreError;
use thiserror::Error;

/// Errors that can occur while configuring or running Tasklist.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// HTTP server error.
    #[error("server error: {0}")]
    Http(#[from] HttpError),

    /// An environment variable held an unusable value.
    #[error("invalid value {value:?} for {var}: {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type for Tasklist operations.
pub type Result<T> = std::result::Result<T, TaskListError>;
