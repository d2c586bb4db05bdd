//! Wire types for the account API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as returned by the API. Fetched for rendering only;
/// never cached beyond the current page load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

/// User role, numeric on the wire: `0` is Admin, anything else is a
/// regular user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Role {
    Admin,
    User,
}

impl From<u32> for Role {
    fn from(value: u32) -> Self {
        if value == 0 { Role::Admin } else { Role::User }
    }
}

impl From<Role> for u32 {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => 0,
            Role::User => 1,
        }
    }
}

impl Role {
    /// Display label for the account page.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

/// Login request body.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Profile update body. A blank password means "keep the current one"
/// and the key is omitted entirely so the server leaves it untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateProfile {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateProfile {
    /// Build an update payload, dropping the password when blank.
    pub fn new(name: String, email: String, password: String) -> Self {
        let password = if password.is_empty() { None } else { Some(password) };
        Self { name, email, password }
    }
}

/// Password re-confirmation carried in the delete-account request body.
#[derive(Clone, Debug, Serialize)]
pub struct DeleteConfirmation {
    pub password: String,
}

/// `{token}` response from login and registration.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `{data: User}` envelope returned by account fetch and profile update.
#[derive(Clone, Debug, Deserialize)]
pub struct AccountEnvelope {
    pub data: User,
}

/// Error body shape; the server usually sends `{message}` on 4xx.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
