//! Client view model.
//!
//! Pure functions from list state to a view description. A browser (or any
//! other front end) turns a [`ListView`] into DOM nodes and maps user events
//! back onto requests; no business logic lives on that side.

use std::time::Duration;

use crate::filter::Filter;
use crate::item::Item;
use crate::types::ItemId;

/// A rendered list: filter bar plus rows or an empty-state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub filter: Filter,
    pub buttons: Vec<FilterButton>,
    pub rows: Vec<RowView>,
    /// Set only when `rows` is empty.
    pub empty_message: Option<String>,
}

/// One button of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: Filter,
    /// Mirrors `aria-pressed`.
    pub pressed: bool,
}

/// One rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    pub class: String,
    pub toggle_label: String,
    pub delete_label: String,
}

impl RowView {
    fn from_item(item: &Item) -> Self {
        let class = if item.completed {
            "todo-item completed"
        } else {
            "todo-item"
        };
        let target = if item.completed { "incomplete" } else { "complete" };

        Self {
            id: item.id,
            text: item.text.clone(),
            completed: item.completed,
            class: class.to_string(),
            toggle_label: format!("Mark \"{}\" as {}", item.text, target),
            delete_label: format!("Delete \"{}\"", item.text),
        }
    }

    /// The `completed` value to send when the checkbox is toggled.
    pub fn toggled(&self) -> bool {
        !self.completed
    }
}

/// Render the items returned by the server for `filter`.
pub fn render(items: &[Item], filter: Filter) -> ListView {
    let buttons = Filter::ALL
        .iter()
        .map(|&f| FilterButton {
            filter: f,
            pressed: f == filter,
        })
        .collect();

    let rows: Vec<RowView> = items.iter().map(RowView::from_item).collect();
    let empty_message = rows.is_empty().then(|| empty_message(filter));

    ListView {
        filter,
        buttons,
        rows,
        empty_message,
    }
}

fn empty_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No todos".to_string(),
        other => format!("No {} todos", other),
    }
}

/// Resolve the filter shown after the URL changed (initial load or
/// back/forward navigation).
///
/// Unknown values leave the current filter in place.
pub fn filter_from_url(query_value: Option<&str>, current: Filter) -> Filter {
    match query_value {
        None => Filter::All,
        Some(value) => Filter::parse(value).unwrap_or(current),
    }
}

/// Decide what a click on a filter button does.
///
/// Returns `None` when the clicked filter is already active, otherwise the
/// new filter; the caller pushes `Filter::query_value` into the URL and
/// reloads the list.
pub fn filter_click(current: Filter, clicked: Filter) -> Option<Filter> {
    (current != clicked).then_some(clicked)
}

/// Prepare input-box text for submission. Blank input is not submitted.
pub fn prepare_new_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Kind of transient status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// A transient status message shown after a client action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: &'static str,
}

impl Banner {
    /// How long a banner stays visible.
    pub const DURATION: Duration = Duration::from_secs(3);

    const fn success(message: &'static str) -> Self {
        Self {
            kind: BannerKind::Success,
            message,
        }
    }

    const fn error(message: &'static str) -> Self {
        Self {
            kind: BannerKind::Error,
            message,
        }
    }

    pub const fn added() -> Self {
        Self::success("Todo added successfully!")
    }

    pub const fn add_failed() -> Self {
        Self::error("Failed to add todo")
    }

    pub const fn update_failed() -> Self {
        Self::error("Failed to update todo")
    }

    pub const fn deleted() -> Self {
        Self::success("Todo deleted")
    }

    pub const fn delete_failed() -> Self {
        Self::error("Failed to delete todo")
    }

    pub const fn load_failed() -> Self {
        Self::error("Failed to load todos. Make sure the server is running.")
    }

    /// CSS class of the visible banner element.
    pub fn class(&self) -> String {
        format!("status-message show {}", self.kind.as_str())
    }
}
