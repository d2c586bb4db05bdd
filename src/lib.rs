//! # account-portal
//!
//! Leptos + WASM client for authentication and self-service account
//! management against a remote HTTP API: login, registration, profile
//! view/edit, and account deletion.
//!
//! A bearer token lives in browser localStorage under a single key.
//! Every page load runs the session gate in [`session`]: a stored token
//! is validated against the API before any account view renders, and a
//! rejected token is evicted on the spot. There is no local expiry check
//! and no cached trust.
//!
//! Browser-only code (HTTP, storage, timers) is gated behind the
//! `hydrate` feature with server-side stand-ins, so the decision logic
//! in [`session`], [`util`], and [`net::types`] stays testable natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point — hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
