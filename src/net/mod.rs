//! HTTP layer: wire types, error shape, and the REST calls.
//!
//! DESIGN
//! ======
//! The base URL is baked in at compile time (`ACCOUNT_PORTAL_API_URL`),
//! defaulting to relative paths so the app works behind the same origin
//! that serves it. Calls go through `gloo-net` in the browser; on the
//! server the same functions return a network error so nothing here can
//! panic during SSR.

pub mod api;
pub mod error;
pub mod types;


/// Join the configured base URL with an API path.
///
/// Read once per call but constant per build, which mirrors a
/// build-time environment variable in the deployment pipeline.
pub fn url(path: &str) -> String {
    let base = option_env!("ACCOUNT_PORTAL_API_URL").unwrap_or("");
    format!("{}{}", base.trim_end_matches('/'), path)
}
