//! The session gate state machine.
//!
//! Evaluated once per page load. Pure: the driver in the parent module
//! feeds in what it read from storage and what the API said, and this
//! module decides what renders and whether the token must be evicted.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::User;

/// Which page is being loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Account,
}

/// Result of validating a stored token against the API. Any non-200
/// response and any network failure count as `Rejected` — there is no
/// offline trust decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Accepted(User),
    Rejected,
}

/// Terminal action for the page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Show the login/register forms.
    RenderForms,
    /// Show the account page for this validated user.
    RenderAccount(User),
    /// Go to the login page. `expired` marks an evicted session, which
    /// gets a "session expired" notice on the destination render.
    RedirectToLogin { expired: bool },
}

/// An [`Outcome`] plus whether the stored token must be cleared before
/// acting on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub clear_token: bool,
}

/// Decide the page load. `validation` is `None` when no token was
/// readable (absent token and unreachable storage look the same here).
///
/// A validated session wins everywhere: on the login and register pages
/// it redirects to the account page instead of rendering forms. A
/// rejected token is evicted no matter which page found it.
pub fn resolve(page: Page, validation: Option<Validation>) -> Resolution {
    match validation {
        None => Resolution {
            outcome: match page {
                Page::Login | Page::Register => Outcome::RenderForms,
                Page::Account => Outcome::RedirectToLogin { expired: false },
            },
            clear_token: false,
        },
        Some(Validation::Accepted(user)) => Resolution {
            outcome: Outcome::RenderAccount(user),
            clear_token: false,
        },
        Some(Validation::Rejected) => Resolution {
            outcome: Outcome::RedirectToLogin { expired: true },
            clear_token: true,
        },
    }
}
