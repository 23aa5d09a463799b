//! Event Bindings
//!
//! Maps user interactions onto the mutators. Control clicks are handled by a
//! single delegated listener on the list container, so entries produced by
//! later renders are covered without re-binding.

use leptos::html::Input;
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::{DELETE_CLASS, ENTRY_CLASS, ID_ATTR, INDEX_ATTR, TOGGLE_CLASS};
use crate::mutators::{handle_add, handle_delete, handle_toggle};
use crate::store::{ListStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("control is not inside a list entry")]
    MissingEntry,
    #[error("list entry has no {0} attribute")]
    MissingAttribute(&'static str),
    #[error("invalid entry attribute value {0:?}")]
    InvalidIndex(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which per-entry control was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Toggle,
    Delete,
}

impl ControlKind {
    /// Classify a whitespace-separated class list
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| match class {
            TOGGLE_CLASS => Some(ControlKind::Toggle),
            DELETE_CLASS => Some(ControlKind::Delete),
            _ => None,
        })
    }
}

/// Position and identity read back from a rendered entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef {
    pub index: usize,
    pub id: Option<u32>,
}

/// Parse a stored positional index (base 10)
pub fn parse_index(raw: &str) -> Result<usize, BindingError> {
    raw.trim().parse().map_err(|_| BindingError::InvalidIndex(raw.to_string()))
}

fn parse_id(raw: &str) -> Result<u32, BindingError> {
    raw.trim().parse().map_err(|_| BindingError::InvalidIndex(raw.to_string()))
}

/// Apply an activated control to the store.
///
/// When the entry carried an id, the index is first checked against it so a
/// stale index never mutates the wrong item.
pub fn apply_control(store: &ListStore, kind: ControlKind, entry: EntryRef) -> Result<(), BindingError> {
    let index = match entry.id {
        Some(id) => store.with_untracked(|s| s.resolve(entry.index, id))?,
        None => entry.index,
    };
    match kind {
        ControlKind::Toggle => handle_toggle(store, index)?,
        ControlKind::Delete => handle_delete(store, index)?,
    }
    Ok(())
}

/// Nearest toggle/delete control at or above the click target
fn find_control(target: &Element) -> Option<(ControlKind, Element)> {
    let mut current = Some(target.clone());
    while let Some(el) = current {
        if let Some(kind) = ControlKind::from_class_list(&el.class_name()) {
            return Some((kind, el));
        }
        current = el.parent_element();
    }
    None
}

/// Walk up from a control to its list entry and read back index and id
pub fn recover_entry(control: &Element) -> Result<EntryRef, BindingError> {
    let entry = control
        .closest(&format!(".{}", ENTRY_CLASS))
        .ok()
        .flatten()
        .ok_or(BindingError::MissingEntry)?;
    let raw_index = entry
        .get_attribute(INDEX_ATTR)
        .ok_or(BindingError::MissingAttribute(INDEX_ATTR))?;
    let id = entry.get_attribute(ID_ATTR).map(|raw| parse_id(&raw)).transpose()?;
    Ok(EntryRef { index: parse_index(&raw_index)?, id })
}

/// Delegated click handler for the list container
pub fn on_list_click(store: ListStore) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        // Clicks outside any control are ignored
        let Some((kind, control)) = find_control(&target) else {
            return;
        };
        let result = recover_entry(&control).and_then(|entry| apply_control(&store, kind, entry));
        if let Err(err) = result {
            log::warn!("[BINDINGS] dropped {:?} interaction: {}", kind, err);
        }
    }
}

/// Submit handler for the add-item form
pub fn on_form_submit(store: ListStore, input: NodeRef<Input>) -> impl Fn(web_sys::SubmitEvent) + Copy + 'static {
    move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input.get_untracked() else {
            log::warn!("[BINDINGS] add-item input is not mounted");
            return;
        };
        let name = input.value();
        input.set_value("");
        handle_add(&store, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_seed;
    use crate::store::ItemStore;
    use reactive_stores::Store;

    fn seeded() -> ListStore {
        Store::new(ItemStore::with_seed(default_seed()))
    }

    fn names(store: &ListStore) -> Vec<String> {
        store.with_untracked(|s| s.all().iter().map(|i| i.name.clone()).collect())
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index("12"), Ok(12));
        assert_eq!(parse_index("007"), Ok(7));
        assert_eq!(parse_index("-1"), Err(BindingError::InvalidIndex("-1".to_string())));
        assert_eq!(parse_index("0x1"), Err(BindingError::InvalidIndex("0x1".to_string())));
        assert!(parse_index("").is_err());
    }

    #[test]
    fn test_control_classification() {
        assert_eq!(
            ControlKind::from_class_list(&format!("shopping-item-toggle {}", TOGGLE_CLASS)),
            Some(ControlKind::Toggle)
        );
        assert_eq!(
            ControlKind::from_class_list(&format!("{} shopping-item-delete", DELETE_CLASS)),
            Some(ControlKind::Delete)
        );
        assert_eq!(ControlKind::from_class_list("shopping-item-toggle"), None);
        assert_eq!(ControlKind::from_class_list(""), None);
    }

    #[test]
    fn test_apply_toggle_and_delete() {
        let store = seeded();
        apply_control(&store, ControlKind::Toggle, EntryRef { index: 0, id: Some(0) }).unwrap();
        apply_control(&store, ControlKind::Delete, EntryRef { index: 1, id: Some(1) }).unwrap();
        assert_eq!(names(&store), vec!["apples", "milk", "bread"]);
        store.with_untracked(|s| assert_eq!(s.checked_count(), 2));
    }

    #[test]
    fn test_stale_entry_is_rejected() {
        let store = seeded();
        // Entry rendered as (index 2, milk #2) before apples was removed
        apply_control(&store, ControlKind::Delete, EntryRef { index: 0, id: Some(0) }).unwrap();
        let err = apply_control(&store, ControlKind::Delete, EntryRef { index: 2, id: Some(2) }).unwrap_err();
        assert_eq!(err, BindingError::Store(StoreError::StaleIndex { index: 2, id: 2 }));
        assert_eq!(names(&store), vec!["oranges", "milk", "bread"]);
    }

    #[test]
    fn test_out_of_range_entry_is_rejected() {
        let store = seeded();
        let err = apply_control(&store, ControlKind::Toggle, EntryRef { index: 8, id: None }).unwrap_err();
        assert_eq!(err, BindingError::Store(StoreError::IndexOutOfRange { index: 8, len: 4 }));
        store.with_untracked(|s| assert_eq!(s.checked_count(), 1));
    }
}
