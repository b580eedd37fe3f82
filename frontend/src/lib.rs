pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use std::sync::Once;

static STARTED: Once = Once::new();

/// Installs logging, kicks off runtime config loading and mounts the app.
/// Safe to call more than once; only the first call has an effect.
pub fn run() {
    STARTED.call_once(|| {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger unavailable: {}", err).into());
        }
        log::info!("Starting Enterprise HR frontend");

        // window.__ENTERPRISE_ENV (env.js) wins over ./config.json when present.
        leptos::spawn_local(async move {
            config::init().await;
        });

        router::mount_app();
    });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    run();
}
