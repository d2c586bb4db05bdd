use super::*;

#[test]
fn status_error_exposes_server_message() {
    let err = ApiError::Status {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert_eq!(err.status(), Some(401));
}

#[test]
fn status_error_without_body_message_falls_back() {
    let err = ApiError::Status {
        status: 500,
        message: None,
    };
    assert_eq!(err.server_message(), None);
    assert_eq!(
        err.server_message().unwrap_or("An error occurred while logging in."),
        "An error occurred while logging in."
    );
}

#[test]
fn network_error_has_no_server_message() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(err.server_message(), None);
    assert_eq!(err.status(), None);
}

#[test]
fn unavailable_is_a_network_error() {
    assert!(matches!(ApiError::unavailable(), ApiError::Network(_)));
}
