use futures::executor::block_on;

use super::*;

// These exercise the async driver against the in-memory storage
// stand-in. Off the browser the API stub rejects every call, so a
// stored token always takes the validation-failure path — exactly the
// eviction behavior under test.

#[test]
fn signed_out_login_load_renders_forms() {
    assert_eq!(block_on(check(Page::Login)), Outcome::RenderForms);
}

#[test]
fn signed_out_register_load_renders_forms() {
    assert_eq!(block_on(check(Page::Register)), Outcome::RenderForms);
}

#[test]
fn signed_out_account_load_redirects_without_expiry_notice() {
    assert_eq!(
        block_on(check(Page::Account)),
        Outcome::RedirectToLogin { expired: false }
    );
    assert_eq!(block_on(storage::take_notice()), Ok(None));
}

#[test]
fn rejected_token_is_evicted_and_expiry_notice_queued() {
    block_on(storage::set_token("stale")).expect("set");

    let outcome = block_on(check(Page::Account));
    assert_eq!(outcome, Outcome::RedirectToLogin { expired: true });

    // Token store ends empty.
    assert_eq!(block_on(storage::get_token()), Ok(None));

    // The destination page finds the expiry notice queued.
    let queued = block_on(storage::take_notice()).expect("take");
    assert_eq!(queued, Some(QueuedNotice::error(SESSION_EXPIRED)));
}

#[test]
fn eviction_then_recheck_reaches_the_same_outcome() {
    block_on(storage::set_token("stale")).expect("set");
    assert_eq!(
        block_on(check(Page::Account)),
        Outcome::RedirectToLogin { expired: true }
    );

    // Second check starts from NoToken and still lands on login.
    assert_eq!(
        block_on(check(Page::Account)),
        Outcome::RedirectToLogin { expired: false }
    );
}

#[test]
fn rejected_token_on_login_page_is_evicted_too() {
    block_on(storage::set_token("stale")).expect("set");
    assert_eq!(
        block_on(check(Page::Login)),
        Outcome::RedirectToLogin { expired: true }
    );
    assert_eq!(block_on(storage::get_token()), Ok(None));
}
