//! # formdesk
//!
//! Leptos + WASM single-page client for the forms / messaging / tickets back
//! office. Talks to the JSON API under `/api/v1` with a bearer token kept in
//! `localStorage`.
//!
//! The crate splits into a pure core (`config`, `error`, `net`, `router`,
//! `state`, `util`) that builds and tests natively, and the Leptos layer
//! (`app`, `components`, `pages`). Browser-only code is gated behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install logging and the panic hook, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
