//! Reference model of the store.
//!
//! A plain, synchronous rendition of the store rules. Property tests drive
//! the same operation sequence through the model and a real [`Store`] and
//! compare the results.

use tasklist_core::{validate_text, Item, ItemId};
use tasklist_store::{Store, StoreError, StoreExt};

use crate::generators::StoreOp;

/// Observable result of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpResult {
    Item(Item),
    Deleted,
    Rejected,
    NotFound,
}

impl OpResult {
    fn from_store(result: Result<Option<Item>, StoreError>) -> Self {
        match result {
            Ok(Some(item)) => OpResult::Item(item),
            Ok(None) => OpResult::Deleted,
            Err(StoreError::NotFound(_)) => OpResult::NotFound,
            Err(_) => OpResult::Rejected,
        }
    }
}

/// Vec-backed model with a monotonic id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub items: Vec<Item>,
    pub next_id: u64,
    /// Every id ever handed out, in allocation order.
    pub allocated: Vec<ItemId>,
}

impl Model {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            allocated: Vec::new(),
        }
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Apply one operation.
    pub fn apply(&mut self, op: &StoreOp) -> OpResult {
        match op {
            StoreOp::Create(text) => {
                let Ok(text) = validate_text(text) else {
                    return OpResult::Rejected;
                };
                let id = ItemId::new(self.next_id);
                self.next_id += 1;
                self.allocated.push(id);
                let item = Item::new(id, text);
                self.items.push(item.clone());
                OpResult::Item(item)
            }
            StoreOp::Update(id, patch) => match self.position(*id) {
                Some(index) => {
                    self.items[index].apply(patch);
                    OpResult::Item(self.items[index].clone())
                }
                None => OpResult::NotFound,
            },
            StoreOp::Delete(id) => match self.position(*id) {
                Some(index) => {
                    self.items.remove(index);
                    OpResult::Deleted
                }
                None => OpResult::NotFound,
            },
            StoreOp::Toggle(id) => match self.position(*id) {
                Some(index) => {
                    let item = &mut self.items[index];
                    item.completed = !item.completed;
                    OpResult::Item(item.clone())
                }
                None => OpResult::NotFound,
            },
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one operation to a real store.
pub async fn apply_to_store<S: Store + ?Sized>(store: &S, op: &StoreOp) -> OpResult {
    let result = match op {
        StoreOp::Create(text) => store.create(text).await.map(Some),
        StoreOp::Update(id, patch) => store.update(*id, patch.clone()).await.map(Some),
        StoreOp::Delete(id) => store.delete(*id).await.map(|()| None),
        StoreOp::Toggle(id) => store.toggle(*id).await.map(Some),
    };
    OpResult::from_store(result)
}
