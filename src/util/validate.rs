//! Local form validation.
//!
//! Validation is the only work that happens before a request leaves the
//! page: required fields must be non-empty and the email must match a
//! minimal `local@domain.tld` shape. A validation failure is shown as a
//! notice and never reaches the network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimal email shape: non-empty local part, `@`, non-empty domain,
/// a dot, non-empty TLD. No whitespace or second `@` anywhere.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// A locally rejected form submission. The `Display` strings double as
/// the notice text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Name, email, and password are required.")]
    MissingRegistration,
    #[error("Name and email are required.")]
    MissingProfile,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your password.")]
    MissingPassword,
}

/// Whether `email` matches the `local@domain.tld` shape.
///
/// Pure function of the string; the pattern has no letter classes so
/// case never matters.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a login submission.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if !email_is_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a registration submission.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingRegistration);
    }
    if !email_is_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a profile edit. The password is optional here and not
/// checked — a blank password means "keep the current one".
pub fn validate_profile(name: &str, email: &str) -> Result<(), ValidationError> {
    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingProfile);
    }
    if !email_is_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate the password re-confirmation before account deletion.
pub fn validate_delete_confirmation(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}
