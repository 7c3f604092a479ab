//! Request and response shapes for each operation.
//!
//! These are plain serde types, independent of the HTTP framework.

use serde::{Deserialize, Serialize};

use tasklist_core::{Item, ItemPatch};

/// Fixed error messages returned to clients.
pub mod errors {
    /// Create without usable text.
    pub const TEXT_REQUIRED: &str = "Text is required";
    /// Update or delete of an unknown id.
    pub const NOT_FOUND: &str = "Todo not found";
    /// Anything the client cannot fix.
    pub const INTERNAL: &str = "Internal server error";
}

/// The filter name used when none is requested.
pub const DEFAULT_FILTER: &str = "all";

/// Query string of `GET /items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

impl ListQuery {
    /// Query with a filter name.
    pub fn filter(name: impl Into<String>) -> Self {
        Self {
            filter: Some(name.into()),
        }
    }

    /// Build from decoded query pairs. The first `filter` key wins; other
    /// keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let filter = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == "filter")
            .map(|(_, value)| value.into());
        Self { filter }
    }

    /// The requested filter name, or `"all"` when missing or empty.
    pub fn filter_name(&self) -> &str {
        match self.filter.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_FILTER,
        }
    }
}

/// Body of `GET /items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<Item>,
    /// The filter name exactly as requested.
    pub filter: String,
}

/// Body of `POST /items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateItemRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Body of `PATCH /items/{id}`.
///
/// Absent and `null` fields are both left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub text: Option<String>,
}

impl UpdateItemRequest {
    /// Request setting only the completed flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            text: None,
        }
    }

    /// Request replacing only the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            completed: None,
            text: Some(text.into()),
        }
    }
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(request: UpdateItemRequest) -> Self {
        ItemPatch {
            text: request.text,
            completed: request.completed,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
