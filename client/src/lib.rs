//! # client
//!
//! Leptos + WASM front-end for the Rating Management System (RMS).
//!
//! This crate contains the route-level pages, reusable components, list/form
//! state, the typed REST client, and the API base-URL configuration. The
//! `ssr` feature renders pages inside the `rms` host; the `hydrate` feature
//! builds the browser bundle that takes over those pages and talks to the
//! RMS REST API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
