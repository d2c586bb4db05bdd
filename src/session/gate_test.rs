use super::*;
use crate::net::types::{Role, User};

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.org".to_owned(),
        role: Role::User,
        active: true,
    }
}

// =============================================================
// No token
// =============================================================

#[test]
fn no_token_renders_forms_on_login_and_register() {
    for page in [Page::Login, Page::Register] {
        let res = resolve(page, None);
        assert_eq!(res.outcome, Outcome::RenderForms);
        assert!(!res.clear_token);
    }
}

#[test]
fn no_token_on_account_page_forces_login_redirect() {
    let res = resolve(Page::Account, None);
    assert_eq!(res.outcome, Outcome::RedirectToLogin { expired: false });
    assert!(!res.clear_token);
}

// =============================================================
// Accepted token
// =============================================================

#[test]
fn accepted_token_renders_account_on_every_page() {
    for page in [Page::Login, Page::Register, Page::Account] {
        let res = resolve(page, Some(Validation::Accepted(user())));
        assert_eq!(res.outcome, Outcome::RenderAccount(user()));
        assert!(!res.clear_token);
    }
}

#[test]
fn validated_session_never_renders_forms() {
    let res = resolve(Page::Login, Some(Validation::Accepted(user())));
    assert_ne!(res.outcome, Outcome::RenderForms);
}

// =============================================================
// Rejected token
// =============================================================

#[test]
fn rejected_token_evicts_and_redirects_on_every_page() {
    for page in [Page::Login, Page::Register, Page::Account] {
        let res = resolve(page, Some(Validation::Rejected));
        assert_eq!(res.outcome, Outcome::RedirectToLogin { expired: true });
        assert!(res.clear_token);
    }
}

#[test]
fn eviction_is_idempotent() {
    // First load: token rejected, cleared.
    let first = resolve(Page::Account, Some(Validation::Rejected));
    assert!(first.clear_token);

    // Repeating the check now starts from no token and still lands on
    // the login page, without asking for another eviction.
    let second = resolve(Page::Account, None);
    assert_eq!(second.outcome, Outcome::RedirectToLogin { expired: false });
    assert!(!second.clear_token);
}
