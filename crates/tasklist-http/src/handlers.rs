//! Request handlers.
//!
//! Translate typed requests into store and filter calls, and decide the
//! outcome (status and body) of each operation. Nothing here knows about
//! HTTP framing; the router only converts an [`Outcome`] into a response.

use std::sync::Arc;

use tasklist_core::{validate_required_text, Filter, Item, ItemId};
use tasklist_store::{Store, StoreError};

use crate::messages::{errors, CreateItemRequest, ListQuery, ListResponse, UpdateItemRequest};

/// Result of handling one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 200 with a body.
    Ok(T),
    /// 201 with the created resource.
    Created(T),
    /// 204, no body.
    NoContent,
    /// 400 with an error message.
    BadRequest(String),
    /// 404 with an error message.
    NotFound(String),
    /// 500 with an error message.
    Internal(String),
}

impl<T> Outcome<T> {
    /// The status code this outcome maps to.
    pub fn status(&self) -> u16 {
        match self {
            Outcome::Ok(_) => 200,
            Outcome::Created(_) => 201,
            Outcome::NoContent => 204,
            Outcome::BadRequest(_) => 400,
            Outcome::NotFound(_) => 404,
            Outcome::Internal(_) => 500,
        }
    }

    /// Whether the outcome is a 2xx.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Ok(_) | Outcome::Created(_) | Outcome::NoContent)
    }

    /// The success body, if any.
    pub fn into_body(self) -> Option<T> {
        match self {
            Outcome::Ok(body) | Outcome::Created(body) => Some(body),
            _ => None,
        }
    }

    /// The error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Outcome::BadRequest(m) | Outcome::NotFound(m) | Outcome::Internal(m) => Some(m),
            _ => None,
        }
    }

    fn not_found() -> Self {
        Outcome::NotFound(errors::NOT_FOUND.to_string())
    }
}

impl<T> From<StoreError> for Outcome<T> {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Outcome::not_found(),
            StoreError::Validation(e) => Outcome::BadRequest(e.to_string()),
            other => {
                tracing::error!(error = %other, "store operation failed");
                Outcome::Internal(errors::INTERNAL.to_string())
            }
        }
    }
}

/// The request handlers, sharing one store handle.
pub struct Handlers<S: Store> {
    store: Arc<S>,
}

impl<S: Store> Clone for Handlers<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> Handlers<S> {
    /// Create handlers owning a new store handle.
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Create handlers over an existing store handle.
    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List items passing the requested filter.
    ///
    /// Unknown filter names list everything; the name is echoed back as sent.
    pub async fn list(&self, query: ListQuery) -> Outcome<ListResponse> {
        let name = query.filter_name();
        let filter = Filter::from_name(Some(name));

        match self.store.list().await {
            Ok(items) => Outcome::Ok(ListResponse {
                items: filter.apply(&items),
                filter: name.to_string(),
            }),
            Err(e) => e.into(),
        }
    }

    /// Create an item.
    pub async fn create(&self, request: CreateItemRequest) -> Outcome<Item> {
        let text = match validate_required_text(request.text.as_deref()) {
            Ok(text) => text,
            Err(_) => return Outcome::BadRequest(errors::TEXT_REQUIRED.to_string()),
        };

        match self.store.create(&text).await {
            Ok(item) => Outcome::Created(item),
            Err(e) => e.into(),
        }
    }

    /// Apply the fields present in `request` to the item at `id`.
    ///
    /// `id` is the raw path segment; one that is not a positive integer is
    /// treated like an unknown id.
    pub async fn update(&self, id: &str, request: UpdateItemRequest) -> Outcome<Item> {
        let Ok(id) = id.parse::<ItemId>() else {
            return Outcome::not_found();
        };

        match self.store.update(id, request.into()).await {
            Ok(item) => Outcome::Ok(item),
            Err(e) => e.into(),
        }
    }

    /// Delete the item at `id`.
    pub async fn delete(&self, id: &str) -> Outcome<()> {
        let Ok(id) = id.parse::<ItemId>() else {
            return Outcome::not_found();
        };

        match self.store.delete(id).await {
            Ok(()) => Outcome::NoContent,
            Err(e) => e.into(),
        }
    }
}
