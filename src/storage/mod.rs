//! Persistent device-local key-value storage.
//!
//! Two entries only: the session token under `authToken`, and an
//! optional queued notice under `pendingNotice` that survives one
//! redirect (e.g. "Session expired." shown on the login page after the
//! account page evicted the token).
//!
//! Client-side (hydrate): browser `localStorage`. Non-browser builds use
//! a thread-local in-memory map so SSR and native tests keep real
//! get/set/clear semantics.
//!
//! ERROR HANDLING
//! ==============
//! A missing key is a normal `Ok(None)`, never an error. `StorageError`
//! only means the store itself is unreachable; callers treat that the
//! same as "no token" and nothing here is fatal to a page render.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::notice::QueuedNotice;

/// Key holding the bearer token. At most one session exists at a time.
pub const TOKEN_KEY: &str = "authToken";

/// Key holding a notice queued for the next page render.
pub const NOTICE_KEY: &str = "pendingNotice";

/// The device-local store could not be reached.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
}

/// Read the stored session token, if any.
pub async fn get_token() -> Result<Option<String>, StorageError> {
    read_key(TOKEN_KEY)
}

/// Persist the session token, replacing any previous one.
pub async fn set_token(token: &str) -> Result<(), StorageError> {
    write_key(TOKEN_KEY, token)
}

/// Remove the session token. Removing an absent token is a no-op.
pub async fn clear_token() -> Result<(), StorageError> {
    remove_key(TOKEN_KEY)
}

/// Queue a notice to be shown on the next page render. A later queued
/// notice replaces an earlier unread one.
pub async fn queue_notice(notice: &QueuedNotice) -> Result<(), StorageError> {
    let json = serde_json::to_string(notice).map_err(|_| StorageError::Unavailable)?;
    write_key(NOTICE_KEY, &json)
}

/// Read and clear the queued notice. Unparseable leftovers are dropped
/// silently.
pub async fn take_notice() -> Result<Option<QueuedNotice>, StorageError> {
    let raw = read_key(NOTICE_KEY)?;
    if raw.is_some() {
        remove_key(NOTICE_KEY)?;
    }
    Ok(raw.and_then(|json| serde_json::from_str(&json).ok()))
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn write_key(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn remove_key(key: &str) -> Result<(), StorageError> {
    local_storage()?
        .remove_item(key)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(not(feature = "hydrate"))]
mod standin {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(feature = "hydrate"))]
fn read_key(key: &str) -> Result<Option<String>, StorageError> {
    Ok(standin::read(key))
}

#[cfg(not(feature = "hydrate"))]
fn write_key(key: &str, value: &str) -> Result<(), StorageError> {
    standin::write(key, value);
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn remove_key(key: &str) -> Result<(), StorageError> {
    standin::remove(key);
    Ok(())
}
