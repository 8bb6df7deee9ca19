//! # client
//!
//! Leptos + WASM frontend for the school equipment lending portal.
//!
//! This crate contains the pages, components, and browser glue (storage,
//! fetch, alerts) that sit on top of the `lending-portal` core. The `ssr`
//! build renders the shell for the host server; the `hydrate` build takes
//! over in the browser and talks to the lending REST service directly.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
