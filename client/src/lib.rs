//! RKS Creations single-page site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate builds twice: as a wasm `cdylib` with `hydrate` for the
//! browser, and as an `rlib` with `ssr` for the host server, which renders
//! [`app::shell`] and serves the hydrate bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
