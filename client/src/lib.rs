//! # client
//!
//! Leptos + WASM frontend for the ComPetny pet-fostering portal.
//!
//! This crate contains the identity context, the data-driven router with its
//! auth guard and landing redirect, the session-endpoint client, and the page
//! views for the user area and the admin console.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
