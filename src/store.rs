//! Item Store
//!
//! Ordered list of items, the only mutable state of the app. Items are
//! addressed by positional index; each also carries a stable id so callers
//! holding an index from an older render can check it still names the same item.

use leptos::prelude::*;
use reactive_stores::Store;
use thiserror::Error;

use crate::models::{Item, SeedItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("entry at index {index} is no longer item #{id}")]
    StaleIndex { index: usize, id: u32 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered sequence of items in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u32,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the given seed, in order
    pub fn with_seed(seed: impl IntoIterator<Item = SeedItem>) -> Self {
        let mut store = Self::new();
        for SeedItem { name, checked } in seed {
            store.push(name, checked);
        }
        store
    }

    /// Append an unchecked item. Duplicate and empty names are accepted.
    pub fn add(&mut self, name: impl Into<String>) -> u32 {
        self.push(name.into(), false)
    }

    fn push(&mut self, name: String, checked: bool) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item { id, name, checked });
        id
    }

    /// Remove the item at `index`, shifting later items left by one
    pub fn delete_at(&mut self, index: usize) -> StoreResult<Item> {
        self.check_bounds(index)?;
        Ok(self.items.remove(index))
    }

    /// Invert the checked state of the item at `index`, returning the new state
    pub fn toggle_at(&mut self, index: usize) -> StoreResult<bool> {
        self.check_bounds(index)?;
        let item = &mut self.items[index];
        item.checked = !item.checked;
        Ok(item.checked)
    }

    /// Read-only view for rendering
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Current position of the item with `id`
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Confirm that `index` still addresses item `id`
    pub fn resolve(&self, index: usize, id: u32) -> StoreResult<usize> {
        self.check_bounds(index)?;
        if self.items[index].id == id {
            Ok(index)
        } else {
            Err(StoreError::StaleIndex { index, id })
        }
    }

    fn check_bounds(&self, index: usize) -> StoreResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange { index, len: self.items.len() })
        }
    }
}

/// Reactive handle to the item store
pub type ListStore = Store<ItemStore>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}
