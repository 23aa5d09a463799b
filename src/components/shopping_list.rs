//! Shopping List Component
//!
//! The list container. Its contents are the renderer's markup, replaced as a
//! whole whenever the store changes; the container itself stays mounted and
//! carries the one delegated click listener for all entry controls.

use leptos::prelude::*;

use crate::bindings::on_list_click;
use crate::config::LIST_CLASS;
use crate::render::render_items;
use crate::store::use_list_store;

#[component]
pub fn ShoppingList() -> impl IntoView {
    let store = use_list_store();

    let markup = move || store.with(|s| render_items(s.all()));
    let summary = move || store.with(|s| format!("{} items, {} checked", s.len(), s.checked_count()));

    view! {
        <ul class=LIST_CLASS inner_html=markup on:click=on_list_click(store)></ul>
        <p class="item-count">{summary}</p>
    }
}
