//! # museum-client
//!
//! Leptos + WASM front end for the digital artifact museum desktop app.
//!
//! All data access goes through the desktop backend's named commands
//! (`net`); this crate owns routing, session handling, page state and
//! rendering. Catalogue DTOs, the command table and the gallery layout come
//! from the `catalog` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
