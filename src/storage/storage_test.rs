use futures::executor::block_on;

use super::*;
use crate::state::notice::Severity;

// Each test runs on its own thread, so the thread-local stand-in store
// starts empty per test.

// =============================================================
// Token round-trip
// =============================================================

#[test]
fn get_returns_none_when_nothing_stored() {
    assert_eq!(block_on(get_token()), Ok(None));
}

#[test]
fn set_then_get_returns_the_exact_token() {
    block_on(set_token("abc")).expect("set");
    assert_eq!(block_on(get_token()), Ok(Some("abc".to_owned())));
}

#[test]
fn set_replaces_previous_token() {
    block_on(set_token("first")).expect("set");
    block_on(set_token("second")).expect("set");
    assert_eq!(block_on(get_token()), Ok(Some("second".to_owned())));
}

#[test]
fn clear_then_get_returns_none() {
    block_on(set_token("abc")).expect("set");
    block_on(clear_token()).expect("clear");
    assert_eq!(block_on(get_token()), Ok(None));
}

#[test]
fn clearing_an_absent_token_is_fine() {
    assert_eq!(block_on(clear_token()), Ok(()));
}

// =============================================================
// Queued notice
// =============================================================

#[test]
fn take_notice_is_none_when_queue_is_empty() {
    assert_eq!(block_on(take_notice()), Ok(None));
}

#[test]
fn queued_notice_round_trips_once() {
    let queued = QueuedNotice {
        severity: Severity::Error,
        message: "Session expired. Please log in again.".to_owned(),
    };
    block_on(queue_notice(&queued)).expect("queue");

    let taken = block_on(take_notice()).expect("take");
    assert_eq!(taken, Some(queued));

    // Second read finds the queue already drained.
    assert_eq!(block_on(take_notice()), Ok(None));
}

#[test]
fn later_notice_replaces_unread_one() {
    let first = QueuedNotice {
        severity: Severity::Error,
        message: "first".to_owned(),
    };
    let second = QueuedNotice {
        severity: Severity::Success,
        message: "second".to_owned(),
    };
    block_on(queue_notice(&first)).expect("queue");
    block_on(queue_notice(&second)).expect("queue");

    assert_eq!(block_on(take_notice()), Ok(Some(second)));
}

#[test]
fn notice_queue_does_not_touch_the_token() {
    block_on(set_token("abc")).expect("set");
    let queued = QueuedNotice {
        severity: Severity::Error,
        message: "msg".to_owned(),
    };
    block_on(queue_notice(&queued)).expect("queue");
    let _ = block_on(take_notice());
    assert_eq!(block_on(get_token()), Ok(Some("abc".to_owned())));
}
