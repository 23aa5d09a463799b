//! Store Mutators
//!
//! The three list operations, applied to the reactive store handle.
//! Writing through the handle marks the list dirty, so the renderer
//! re-runs right after each successful mutation.

use leptos::prelude::*;

use crate::store::{ListStore, StoreResult};

/// Append a new unchecked item
pub fn handle_add(store: &ListStore, name: String) -> u32 {
    let id = store.write().add(name);
    log::debug!("[STORE] added item #{}", id);
    id
}

/// Remove the item at `index`
pub fn handle_delete(store: &ListStore, index: usize) -> StoreResult<()> {
    let removed = store.write().delete_at(index)?;
    log::debug!("[STORE] deleted item #{} ({:?}) at {}", removed.id, removed.name, index);
    Ok(())
}

/// Flip the checked state of the item at `index`
pub fn handle_toggle(store: &ListStore, index: usize) -> StoreResult<()> {
    let checked = store.write().toggle_at(index)?;
    log::debug!("[STORE] item at {} is now {}", index, if checked { "checked" } else { "unchecked" });
    Ok(())
}
