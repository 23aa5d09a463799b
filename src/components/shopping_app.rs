//! Shopping App Component
//!
//! Root view: provides the store to children and lays out form and list.

use leptos::prelude::*;

use crate::components::{AddItemForm, ShoppingList};
use crate::store::ListStore;

#[component]
pub fn ShoppingApp(store: ListStore) -> impl IntoView {
    provide_context(store);

    view! {
        <div class="container">
            <h1>"Shopping List"</h1>
            <AddItemForm />
            <ShoppingList />
        </div>
    }
}
