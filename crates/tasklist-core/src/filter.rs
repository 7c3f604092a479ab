//! Status filtering over an item sequence.
//!
//! Filtering is pure: the input is never mutated and relative order is
//! always preserved.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::Item;

/// Which items a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item.
    #[default]
    All,
    /// Items with `completed == false`.
    Active,
    /// Items with `completed == true`.
    Completed,
}

impl Filter {
    /// All filters, in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a known filter name. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// Resolve a requested filter name; missing or unknown names mean `All`.
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or_default()
    }

    /// The canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// The value to put in a URL `filter` parameter.
    ///
    /// `All` is represented by the absence of the parameter.
    pub const fn query_value(&self) -> Option<&'static str> {
        match self {
            Filter::All => None,
            other => Some(other.as_str()),
        }
    }

    /// Whether a single item passes this filter.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    /// Apply this filter to a sequence of items.
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter `items` by a raw filter name.
///
/// `"active"` and `"completed"` select by status; `"all"`, any other value,
/// or no value at all return the input unchanged.
pub fn apply_filter(items: &[Item], name: Option<&str>) -> Vec<Item> {
    Filter::from_name(name).apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;
    use proptest::prelude::*;

    fn item(id: u64, completed: bool) -> Item {
        Item::new(ItemId(id), format!("Task {}", id)).with_completed(completed)
    }

    fn sample() -> Vec<Item> {
        vec![item(1, true), item(2, false), item(3, false)]
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|i| i.id.get()).collect()
    }

    #[test]
    fn test_all_returns_input() {
        let items = sample();
        assert_eq!(apply_filter(&items, Some("all")), items);
    }

    #[test]
    fn test_active_keeps_order() {
        let result = apply_filter(&sample(), Some("active"));
        assert_eq!(ids(&result), vec![2, 3]);
        assert!(result.iter().all(|i| !i.completed));
    }

    #[test]
    fn test_completed() {
        let items = vec![item(1, true), item(2, false), item(3, true)];
        let result = apply_filter(&items, Some("completed"));
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_unknown_and_missing_mean_all() {
        let items = sample();
        assert_eq!(apply_filter(&items, Some("bogus")), items);
        assert_eq!(apply_filter(&items, Some("Active")), items);
        assert_eq!(apply_filter(&items, None), items);
    }

    #[test]
    fn test_empty_input() {
        assert!(apply_filter(&[], Some("all")).is_empty());
        assert!(apply_filter(&[], Some("active")).is_empty());
    }

    #[test]
    fn test_no_matches() {
        let open = vec![item(1, false), item(2, false)];
        assert!(apply_filter(&open, Some("completed")).is_empty());

        let done = vec![item(1, true), item(2, true)];
        assert!(apply_filter(&done, Some("active")).is_empty());
    }

    #[test]
    fn test_query_value() {
        assert_eq!(Filter::All.query_value(), None);
        assert_eq!(Filter::Active.query_value(), Some("active"));
        assert_eq!(Filter::Completed.query_value(), Some("completed"));
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(any::<bool>(), 0..32).prop_map(|flags| {
            flags
                .into_iter()
                .enumerate()
                .map(|(i, done)| item(i as u64 + 1, done))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn test_all_is_identity(items in arb_items()) {
            prop_assert_eq!(Filter::All.apply(&items), items);
        }

        #[test]
        fn test_active_and_completed_partition(items in arb_items()) {
            let active = Filter::Active.apply(&items);
            let completed = Filter::Completed.apply(&items);

            prop_assert_eq!(active.len() + completed.len(), items.len());
            for i in &active {
                prop_assert!(!completed.contains(i));
            }
            for i in &items {
                prop_assert!(active.contains(i) || completed.contains(i));
            }
        }

        #[test]
        fn test_filter_preserves_relative_order(items in arb_items()) {
            for filter in Filter::ALL {
                let out = ids(&filter.apply(&items));
                let mut sorted = out.clone();
                sorted.sort_unstable();
                prop_assert_eq!(out, sorted);
            }
        }
    }
}
