//! # ridewise-client
//!
//! Leptos + WASM navigation chrome for the RideWise ride-sharing web app.
//!
//! The crate renders the top navigation bar, watches the identity provider
//! for sign-in changes, and confirms registration against the RideWise API
//! before showing profile controls. Browser-only bindings live behind the
//! `hydrate` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod identity;
pub mod net;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
