//! # softsell-client
//!
//! Leptos + WASM frontend for the SoftSell landing page.
//!
//! This crate contains the page, its section components, the chat widget
//! and contact form state, and the wire types shared with the server. The
//! server renders it with the `ssr` feature; the browser bundle is built
//! with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
