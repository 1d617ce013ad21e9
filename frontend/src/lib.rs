//! Role-aware access gates for a Leptos single-page app.
//!
//! Gating here is presentation only. Every protected resource must also be
//! authorized by the API.

pub mod access;
pub mod api;
pub mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting Accessgate frontend");

    // Resolve the API base url early; the session request awaits the same value.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}
