use wasm_bindgen::prelude::*;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&format!("Logger already initialised: {}", err).into());
    }
    log::info!("Starting Gatehouse frontend (wasm)");

    // Session storage kind and the fallback route are read while mounting.
    leptos::spawn_local(async move {
        let resolved = config::init().await;
        log::debug!("Runtime config initialized: {:?}", resolved);
        router::mount_app();
    });
}
