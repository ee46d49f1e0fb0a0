//! # milktea-client
//!
//! Leptos + WASM front end for the milk tea shop ordering assistant.
//!
//! This crate contains the persisted assistant configuration store, the
//! localization tables, the route table and the pages mounted by it. The
//! root package hosts it with SSR; the `hydrate` build runs in the browser.

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
