//! Item: the unit of the task list.
//!
//! An item is created with validated text and `completed = false`, mutated in
//! place by patches, and removed permanently on delete.

use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// A single task-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Allocator-assigned id. Immutable.
    pub id: ItemId,
    /// Display text.
    pub text: String,
    /// Whether the item is done.
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item.
    ///
    /// The caller is responsible for validating `text`.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Set the completed flag (builder style).
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Whether the item is still open.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Apply a patch in place.
    ///
    /// Only the fields present in the patch change.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// A partial update to an item.
///
/// Each field is independent: `None` means "leave unchanged". Supplied text
/// is taken verbatim, without the trimming applied at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl ItemPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the completed flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}
