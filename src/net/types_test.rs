use super::*;

fn sample_user_json() -> &'static str {
    r#"{"_id":"u-42","name":"Ada","email":"ada@example.org","role":1,"active":true}"#
}

// =============================================================
// User / Role
// =============================================================

#[test]
fn user_deserializes_underscore_id() {
    let user: User = serde_json::from_str(sample_user_json()).expect("user json");
    assert_eq!(user.id, "u-42");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.role, Role::User);
    assert!(user.active);
}

#[test]
fn role_zero_is_admin_everything_else_is_user() {
    assert_eq!(Role::from(0), Role::Admin);
    assert_eq!(Role::from(1), Role::User);
    assert_eq!(Role::from(7), Role::User);
}

#[test]
fn role_labels() {
    assert_eq!(Role::Admin.label(), "Admin");
    assert_eq!(Role::User.label(), "User");
}

#[test]
fn account_envelope_unwraps_data() {
    let body = format!(r#"{{"data":{}}}"#, sample_user_json());
    let envelope: AccountEnvelope = serde_json::from_str(&body).expect("envelope");
    assert_eq!(envelope.data.email, "ada@example.org");
}

// =============================================================
// UpdateProfile — blank password must not reach the wire
// =============================================================

#[test]
fn update_profile_omits_blank_password() {
    let payload = UpdateProfile::new(
        "Ada".to_owned(),
        "ada@example.org".to_owned(),
        String::new(),
    );
    let json = serde_json::to_value(&payload).expect("serialize");
    assert!(json.get("password").is_none());
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["email"], "ada@example.org");
}

#[test]
fn update_profile_keeps_non_blank_password() {
    let payload = UpdateProfile::new(
        "Ada".to_owned(),
        "ada@example.org".to_owned(),
        "newpass".to_owned(),
    );
    let json = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(json["password"], "newpass");
}

// =============================================================
// Error body
// =============================================================

#[test]
fn error_body_reads_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#)
        .expect("error body");
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").expect("error body");
    assert!(body.message.is_none());
}

#[test]
fn token_response_reads_token() {
    let body: TokenResponse = serde_json::from_str(r#"{"token":"abc"}"#).expect("token");
    assert_eq!(body.token, "abc");
}
