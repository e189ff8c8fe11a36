// lib.rs - Root module for the catalog_view library
//
// The web_app module holds the Leptos application (model, server functions,
// components, pages). The config module and the native catalog client are
// only compiled with the `client` feature; fixtures hold canned catalog
// responses shared by the test binaries.

/// Canned catalog responses used by tests and local tooling
pub mod fixtures;

/// Environment-driven configuration for the native catalog client
#[cfg(feature = "client")]
pub mod config;

pub mod web_app;

/// WASM entry point: hydrates the server-rendered page in the browser
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
