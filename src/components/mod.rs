//! UI Components
//!
//! Leptos shell around the rendered list.

mod shopping_app;
mod add_item_form;
mod shopping_list;

pub use shopping_app::ShoppingApp;
pub use add_item_form::AddItemForm;
pub use shopping_list::ShoppingList;
