//! # urbansync
//!
//! Leptos + WASM frontend for the UrbanSync civic-issue reporting app:
//! citizens pin problems on a map, department staff triage and resolve them.
//!
//! The crate centers on the session lifecycle — the session store, the
//! identity-provider bootstrapper, the derived auth context, and the
//! role-based route gate. Pages and components are thin views over that
//! core; persistence and authorization live in the hosted identity provider
//! and the GraphQL data service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
