//! API error shape.
//!
//! ERROR HANDLING
//! ==============
//! Failures come in two kinds: the server answered with a non-2xx status
//! (possibly carrying a `{message}` body), or the request never completed.
//! The UI shows both through the same notice field, so both kinds expose
//! an optional server message and callers supply their own fallback text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx HTTP response, with the server's message when the body
    /// carried one.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request could not complete (DNS, refused connection, aborted).
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Stand-in used by the non-browser builds of the API functions.
    pub fn unavailable() -> Self {
        ApiError::Network("not available on server".to_owned())
    }

    /// The server-supplied message, if any. Network failures and bodies
    /// without a `message` field return `None` and the caller falls back
    /// to its own wording.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Network(_) => None,
        }
    }

    /// HTTP status code, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }
}
