//! Bootstrap
//!
//! Locates the host element, reads its configuration attributes and mounts
//! the app into it once for the lifetime of the page.

use leptos::prelude::*;
use reactive_stores::Store;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::ShoppingApp;
use crate::config::{ListConfig, LOG_LEVEL_ATTR, MOUNT_ID, SEED_ATTR};
use crate::store::ItemStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootError {
    #[error("no document available")]
    NoDocument,
    #[error("mount target #{0} not found in page")]
    MissingMountTarget(String),
    #[error("mount target #{0} is not an HTML element")]
    MountNotHtml(String),
}

/// Render the seed list and install the event bindings
pub fn start() -> Result<(), BootError> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or(BootError::NoDocument)?;
    let mount = document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| BootError::MissingMountTarget(MOUNT_ID.to_string()))?;

    let config = ListConfig::from_attributes(
        mount.get_attribute(SEED_ATTR).as_deref(),
        mount.get_attribute(LOG_LEVEL_ATTR).as_deref(),
    );
    log::set_max_level(config.log_level);

    let mount = mount
        .dyn_into::<HtmlElement>()
        .map_err(|_| BootError::MountNotHtml(MOUNT_ID.to_string()))?;

    let seed = config.seed;
    log::info!("[BOOT] mounting into #{} with {} seed items", MOUNT_ID, seed.len());
    leptos::mount::mount_to(mount, move || {
        let store = Store::new(ItemStore::with_seed(seed));
        view! { <ShoppingApp store=store /> }
    })
    .forget();
    Ok(())
}
