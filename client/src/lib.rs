//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, its components, shared reactive state and
//! browser helpers. The gallery modal is driven by the `gallery` crate's
//! controller; this crate supplies the signal-backed surface it renders into.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
