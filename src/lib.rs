//! AI Tool Hub storefront
//!
//! Header, sign-in flow and a three step checkout with a simulated payment,
//! built with Leptos (server rendering through axum, hydration in
//! WebAssembly). Domain rules live in [`core`] and are testable without a
//! browser; [`ui`] wraps them in reactive services and components.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
