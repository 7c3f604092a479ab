//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tasklist_core::{Filter, ItemId, ItemPatch};

/// Ids targeted by generated operations stay in this range, so sequences
/// hit both live and missing items.
pub const MAX_TARGET_ID: u64 = 24;

/// Generate item text, including blank and padded strings.
pub fn item_text() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[A-Za-z][A-Za-z0-9 ]{0,23}".prop_map(String::from),
        1 => " {0,3}[a-z]{1,8} {0,3}".prop_map(String::from),
        1 => " {0,4}".prop_map(String::from),
    ]
}

/// Generate text that survives creation validation.
pub fn valid_text() -> impl Strategy<Value = String> {
    "[A-Za-z]([A-Za-z0-9 ]{0,22}[A-Za-z0-9])?".prop_map(String::from)
}

/// Generate a target id.
pub fn target_id() -> impl Strategy<Value = ItemId> {
    (1..=MAX_TARGET_ID).prop_map(ItemId::new)
}

/// Generate a patch with any combination of fields present.
pub fn item_patch() -> impl Strategy<Value = ItemPatch> {
    (
        proptest::option::of(item_text()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(text, completed)| ItemPatch { text, completed })
}

/// Generate a filter.
pub fn filter() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        Just(Filter::Active),
        Just(Filter::Completed),
    ]
}

/// One store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Create(String),
    Update(ItemId, ItemPatch),
    Delete(ItemId),
    Toggle(ItemId),
}

impl Arbitrary for StoreOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            3 => item_text().prop_map(StoreOp::Create),
            2 => (target_id(), item_patch()).prop_map(|(id, p)| StoreOp::Update(id, p)),
            2 => target_id().prop_map(StoreOp::Delete),
            1 => target_id().prop_map(StoreOp::Toggle),
        ]
        .boxed()
    }
}

/// Generate a sequence of up to `max_len` operations.
pub fn store_ops(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(any::<StoreOp>(), 0..=max_len)
}
