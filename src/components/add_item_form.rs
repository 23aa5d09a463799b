//! Add Item Form Component

use leptos::html::Input;
use leptos::prelude::*;

use crate::bindings::on_form_submit;
use crate::config::{FORM_ID, INPUT_CLASS};
use crate::store::use_list_store;

/// Form for appending a new item to the list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_list_store();
    let input_ref = NodeRef::<Input>::new();

    view! {
        <form id=FORM_ID on:submit=on_form_submit(store, input_ref)>
            <label for="shopping-list-entry">"Add an item"</label>
            <input
                type="text"
                id="shopping-list-entry"
                name="shopping-list-entry"
                class=INPUT_CLASS
                placeholder="e.g., broccoli"
                node_ref=input_ref
            />
            <button type="submit">"Add item"</button>
        </form>
    }
}
