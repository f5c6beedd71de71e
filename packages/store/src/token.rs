//! # Token store: bearer token persistence on an abstract key-value backend
//!
//! The client keeps exactly one piece of durable state: the bearer token issued
//! at login. [`TokenStore`] owns that value under the fixed key [`TOKEN_KEY`] and
//! delegates the actual storage to a [`KeyValueStore`], so the same logic runs
//! against browser `localStorage`, a directory on disk, or an in-memory map.
//!
//! ## Lifecycle
//!
//! | Operation | When |
//! |-----------|------|
//! | [`get`](TokenStore::get) | once at startup, to decide whether a session can be restored |
//! | [`set`](TokenStore::set) | after a successful login |
//! | [`clear`](TokenStore::clear) | on logout, or when the stored token is rejected by the server |
//!
//! ## Failure policy
//!
//! Backend errors never reach the caller. A failed read is logged and reported
//! as "no token", which puts the app in the logged-out state; a failed write or
//! delete is logged and otherwise ignored.

use crate::error::StoreError;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "userToken";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Persists the session's bearer token.
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    backend: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the stored token. Empty values and read failures count as absent.
    pub fn get(&self) -> Option<String> {
        match self.backend.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.trim().is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Restoring token failed");
                None
            }
        }
    }

    pub fn set(&self, token: &str) {
        if let Err(e) = self.backend.set(TOKEN_KEY, token) {
            tracing::error!(error = %e, "Persisting token failed");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(TOKEN_KEY) {
            tracing::error!(error = %e, "Clearing token failed");
        }
    }
}
