#![recursion_limit = "256"]
pub mod api;
pub mod common;
pub mod frontend;
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod services;
pub mod wizard;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(frontend::App);
}
