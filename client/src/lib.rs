//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, its section components, typed UI state,
//! browser glue, and the EmailJS bridge. With `ssr` it renders on the
//! server; with `hydrate` it attaches to that markup in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
