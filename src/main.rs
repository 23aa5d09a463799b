//! Shopping List Frontend Entry Point

mod models;
mod config;
mod store;
mod render;
mod mutators;
mod bindings;
mod components;
mod bootstrap;
mod logger;

use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    if let Err(err) = bootstrap::start() {
        log::error!("[BOOT] {}", err);
        wasm_bindgen::throw_str(&err.to_string());
    }
}
