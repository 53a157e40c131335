//! # client
//!
//! Leptos + WASM front end for the leadboard CRM.
//!
//! Components here are thin projections of the state machines in the
//! `widgets` crate: they render the current state declaratively and feed DOM
//! events back in. The `hydrate` feature builds the browser bundle; the `ssr`
//! feature lets the server render the same routes.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
