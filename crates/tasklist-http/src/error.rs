//! Error types for the HTTP server.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur while running the HTTP server.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The listening socket could not be opened.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for HTTP server operations.
pub type Result<T> = std::result::Result<T, HttpError>;
