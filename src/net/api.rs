//! REST calls for authentication and account management.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::unavailable`] since these endpoints are
//! only meaningful in the browser.
//!
//! Every function resolves to `Result<payload, ApiError>`; a non-2xx
//! response surfaces the HTTP status plus the server's `{message}` body
//! when present, and a request that never completes surfaces as
//! `ApiError::Network`. No call retries and no call times out — the
//! page keeps its submit control disabled while a request is in flight.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{Credentials, Registration, UpdateProfile, User};

#[cfg(feature = "hydrate")]
use super::types::{AccountEnvelope, DeleteConfirmation, ErrorBody, TokenResponse};

/// Exchange credentials for a session token via `POST /api/v1/users/login`.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&super::url("/api/v1/users/login"))
            .json(credentials)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        let body: TokenResponse = resp.json().await.map_err(request_error)?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::unavailable())
    }
}

/// Create an account and receive a session token via `POST /api/v1/users`.
pub async fn register(registration: &Registration) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&super::url("/api/v1/users"))
            .json(registration)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        let body: TokenResponse = resp.json().await.map_err(request_error)?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err(ApiError::unavailable())
    }
}

/// Fetch the authenticated user via `GET /api/v1/account`.
///
/// This is also the token validation call: any non-200 answer means the
/// token is no longer trusted.
pub async fn fetch_account(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&super::url("/api/v1/account"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        let body: AccountEnvelope = resp.json().await.map_err(request_error)?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::unavailable())
    }
}

/// Update name/email (and optionally password) via `PATCH /api/v1/users/{id}`.
pub async fn update_account(
    token: &str,
    id: &str,
    update: &UpdateProfile,
) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::url(&format!("/api/v1/users/{id}"));
        let resp = gloo_net::http::Request::patch(&url)
            .header("Authorization", &bearer(token))
            .json(update)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        let body: AccountEnvelope = resp.json().await.map_err(request_error)?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, update);
        Err(ApiError::unavailable())
    }
}

/// Delete the account via `DELETE /api/v1/users/{id}`, carrying the
/// password re-confirmation in the request body.
pub async fn delete_account(token: &str, id: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::url(&format!("/api/v1/users/{id}"));
        let confirmation = DeleteConfirmation {
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::delete(&url)
            .header("Authorization", &bearer(token))
            .json(&confirmation)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, password);
        Err(ApiError::unavailable())
    }
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn request_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Turn a non-2xx response into [`ApiError::Status`], pulling the
/// server's `{message}` out of the body when there is one.
#[cfg(feature = "hydrate")]
async fn status_error(resp: &gloo_net::http::Response) -> ApiError {
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Status {
        status: resp.status(),
        message,
    }
}
