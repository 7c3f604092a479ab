//! # Tasklist HTTP
//!
//! Request handlers and the HTTP transport for Tasklist.
//!
//! ## Overview
//!
//! Handling is split in two layers:
//!
//! - [`Handlers`] decide the outcome of each operation from typed requests:
//!   which store call to make, and which status and body to answer with.
//! - [`router`] is the axum glue: it extracts requests, calls the handlers,
//!   and renders each [`Outcome`] as JSON.
//!
//! ## Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `GET` | `/items?filter=all\|active\|completed` | 200 `{items, filter}` | |
//! | `POST` | `/items` | 201 item | 400 `Text is required` |
//! | `PATCH` | `/items/{id}` | 200 item | 404 `Todo not found` |
//! | `DELETE` | `/items/{id}` | 204 | 404 `Todo not found` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist_http::{bind, router, serve, Handlers, ServerConfig};
//! use tasklist_store::MemoryStore;
//!
//! async fn example() {
//!     let app = router(Handlers::new(MemoryStore::new()));
//!     let listener = bind(&ServerConfig::default()).await.unwrap();
//!     serve(listener, app, std::future::pending()).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{HttpError, Result};
pub use handlers::{Handlers, Outcome};
pub use messages::{
    errors, CreateItemRequest, ErrorBody, ListQuery, ListResponse, UpdateItemRequest,
    DEFAULT_FILTER,
};
pub use routes::router;
pub use server::{bind, serve};
