//! Inline notice state: one dismissible message per page, auto-hidden
//! after a fixed interval.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use serde::{Deserialize, Serialize};

/// How long a notice stays up before auto-hiding, in milliseconds.
pub const AUTO_HIDE_MS: u32 = 3_000;

/// Notice severity, which only affects styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Success,
}

/// A notice currently on screen.
///
/// `seq` identifies this particular showing: the auto-hide timer armed
/// for it only fires if the same showing is still up, so a newer notice
/// is never dismissed by an older notice's timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub seq: u64,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>, seq: u64) -> Self {
        Self {
            message: message.into(),
            severity,
            seq,
        }
    }

    /// CSS class for the notice box.
    pub fn css_class(&self) -> &'static str {
        match self.severity {
            Severity::Error => "notice notice--error",
            Severity::Success => "notice notice--success",
        }
    }
}

/// Whether the auto-hide timer armed with `seq` should still dismiss
/// the current notice.
pub fn timer_may_dismiss(current: Option<&Notice>, seq: u64) -> bool {
    current.is_some_and(|notice| notice.seq == seq)
}

/// A notice persisted across one redirect, e.g. "Session expired." queued
/// by the account page for the login page render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedNotice {
    pub severity: Severity,
    pub message: String,
}

impl QueuedNotice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }
}
