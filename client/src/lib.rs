//! # leavedesk-client
//!
//! Leptos + WASM frontend for the leave-management service.
//!
//! This crate contains the role-based route table and its guards, the
//! persisted session store, the REST client for the leave API, and the
//! pages and components built on them. The `server` crate renders it with
//! the `ssr` feature; the browser bundle is built with `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
