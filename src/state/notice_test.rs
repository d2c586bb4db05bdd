use super::*;

// =============================================================
// Styling
// =============================================================

#[test]
fn error_notice_uses_error_class() {
    let notice = Notice::new(Severity::Error, "nope", 1);
    assert_eq!(notice.css_class(), "notice notice--error");
}

#[test]
fn success_notice_uses_success_class() {
    let notice = Notice::new(Severity::Success, "done", 1);
    assert_eq!(notice.css_class(), "notice notice--success");
}

// =============================================================
// Auto-hide supersession
// =============================================================

#[test]
fn timer_dismisses_its_own_showing() {
    let current = Notice::new(Severity::Error, "old", 3);
    assert!(timer_may_dismiss(Some(&current), 3));
}

#[test]
fn stale_timer_never_dismisses_a_newer_notice() {
    let current = Notice::new(Severity::Error, "new", 4);
    assert!(!timer_may_dismiss(Some(&current), 3));
}

#[test]
fn timer_does_nothing_when_notice_already_dismissed() {
    assert!(!timer_may_dismiss(None, 3));
}

// =============================================================
// Queued notices
// =============================================================

#[test]
fn queued_notice_serde_round_trip() {
    let queued = QueuedNotice::error("Session expired. Please log in again.");
    let json = serde_json::to_string(&queued).expect("serialize");
    let back: QueuedNotice = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, queued);
}

#[test]
fn queued_constructors_set_severity() {
    assert_eq!(QueuedNotice::error("x").severity, Severity::Error);
    assert_eq!(QueuedNotice::success("x").severity, Severity::Success);
}
