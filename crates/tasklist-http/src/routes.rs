//! axum transport for the request handlers.
//!
//! Extracts typed requests, delegates to [`Handlers`], and renders each
//! [`Outcome`] as a JSON response.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tasklist_core::Item;
use tasklist_store::Store;

use crate::handlers::{Handlers, Outcome};
use crate::messages::{CreateItemRequest, ErrorBody, ListQuery, ListResponse, UpdateItemRequest};

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Outcome::NoContent => StatusCode::NO_CONTENT.into_response(),
            Outcome::BadRequest(message) => error_response(StatusCode::BAD_REQUEST, message),
            Outcome::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            Outcome::Internal(message) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Build the item routes over a set of handlers.
///
/// Routes:
/// - `GET /items?filter=...`
/// - `POST /items`
/// - `PATCH /items/{id}`
/// - `DELETE /items/{id}`
pub fn router<S: Store + 'static>(handlers: Handlers<S>) -> Router {
    Router::new()
        .route("/items", get(list_items::<S>).post(create_item::<S>))
        .route("/items/{id}", patch(update_item::<S>).delete(delete_item::<S>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(handlers)
}

/// Listing never fails on its query string: an unparseable query lists
/// everything.
async fn list_items<S: Store + 'static>(
    State(handlers): State<Handlers<S>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Outcome<ListResponse> {
    let query = match query {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "ignoring list query");
            ListQuery::default()
        }
    };
    handlers.list(query).await
}

async fn create_item<S: Store + 'static>(
    State(handlers): State<Handlers<S>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Outcome<Item> {
    match payload {
        Ok(Json(request)) => handlers.create(request).await,
        Err(rejection) => Outcome::BadRequest(rejection.body_text()),
    }
}

async fn update_item<S: Store + 'static>(
    State(handlers): State<Handlers<S>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Outcome<Item> {
    match payload {
        Ok(Json(request)) => handlers.update(&id, request).await,
        Err(rejection) => Outcome::BadRequest(rejection.body_text()),
    }
}

async fn delete_item<S: Store + 'static>(
    State(handlers): State<Handlers<S>>,
    Path(id): Path<String>,
) -> Outcome<()> {
    handlers.delete(&id).await
}
