//! Token-gated page access.
//!
//! DESIGN
//! ======
//! The validate-or-evict policy runs on every page load that can reach
//! a token: read the store, validate the token against
//! `GET /api/v1/account`, and either hand the page a fresh user record
//! or evict the token and send the visitor to the login page. The
//! decision itself is the pure state machine in [`gate`]; this module
//! is the async driver around it (storage read, API call, conditional
//! eviction, notice queueing).

pub mod gate;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub use gate::{Outcome, Page, Resolution, Validation};

use crate::net::api;
use crate::state::notice::QueuedNotice;
use crate::storage;

/// Notice queued for the login page when a stored token is rejected.
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

/// Run the session gate for one page load and return the terminal
/// action for the page component to act on.
///
/// Storage failures degrade to "no token" — a broken store must never
/// block the login page from rendering. When the gate decides on
/// eviction the token is cleared here, before the caller navigates, so
/// repeating the check starts from `NoToken` and lands in the same
/// place.
pub async fn check(page: Page) -> Outcome {
    let token = match storage::get_token().await {
        Ok(token) => token,
        Err(_err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("token store unreachable, treating as signed out");
            None
        }
    };

    let validation = match token {
        None => None,
        Some(token) => Some(match api::fetch_account(&token).await {
            Ok(user) => Validation::Accepted(user),
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("stored token rejected: {_err}");
                Validation::Rejected
            }
        }),
    };

    let resolution = gate::resolve(page, validation);
    if resolution.clear_token {
        let _ = storage::clear_token().await;
        let _ = storage::queue_notice(&QueuedNotice::error(SESSION_EXPIRED)).await;
    }
    resolution.outcome
}
