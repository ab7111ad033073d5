use web_sys::console;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(not(target_arch = "wasm32"))]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        console::log_1(&"console logger already installed".into());
    }
    log::info!("Starting AI Assistant Portal (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__PORTAL_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
