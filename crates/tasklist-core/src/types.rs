//! Strong type definitions for Tasklist.
//!
//! Identifiers are newtypes to prevent mixing them up with counts or indices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A positive item identifier.
///
/// Ids are handed out by the store's allocator in strictly increasing order
/// and are never reused, even after the item is deleted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create an id from its raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` at `u64::MAX`.
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// The first id handed out by a default store.
    pub const FIRST: Self = Self(1);
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = ValidationError;

    /// Parse a decimal id, as found in a request path.
    ///
    /// Zero, negative numbers and anything non-numeric are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(ValidationError::InvalidId(s.to_string())),
            Ok(value) => Ok(Self(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_parse() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId(42));
        assert_eq!(" 7 ".parse::<ItemId>().unwrap(), ItemId(7));
    }

    #[test]
    fn test_item_id_parse_rejects_non_positive() {
        assert!("0".parse::<ItemId>().is_err());
        assert!("-3".parse::<ItemId>().is_err());
        assert!("abc".parse::<ItemId>().is_err());
        assert!("".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_item_id_display_and_debug() {
        let id = ItemId::new(12);
        assert_eq!(format!("{}", id), "12");
        assert_eq!(format!("{:?}", id), "ItemId(12)");
    }

    #[test]
    fn test_item_id_next() {
        assert_eq!(ItemId::FIRST.next(), Some(ItemId(2)));
    }

    #[test]
    fn test_item_id_next_at_max() {
        assert_eq!(ItemId(u64::MAX - 1).next(), Some(ItemId(u64::MAX)));
        assert_eq!(ItemId(u64::MAX).next(), None);
    }

    #[test]
    fn test_item_id_serializes_as_number() {
        let json = serde_json::to_string(&ItemId(5)).unwrap();
        assert_eq!(json, "5");
    }
}
