/*
[INPUT]:  Bearer tokens from the login exchange
[OUTPUT]: Token retrieval and reset
[POS]:    Auth layer - session token lifecycle
[UPDATE]: When token storage strategy changes
*/

use std::sync::{Arc, RwLock};

/// Thread-safe store for the opaque session token.
///
/// The token is set only by a successful login exchange and cleared by a
/// failed one. The token carries no expiry metadata; it is assumed valid
/// until a call fails.
#[derive(Debug, Clone)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Create a new empty token store
    pub fn new() -> Self {
        Self {
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Store a freshly obtained token, replacing any prior one
    pub fn set(&self, token: String) {
        let mut guard = self.token.write().unwrap();
        *guard = Some(token);
    }

    /// Get the current token if a login has succeeded
    pub fn get(&self) -> Option<String> {
        let guard = self.token.read().unwrap();
        guard.clone()
    }

    /// Check whether no token is held
    pub fn is_empty(&self) -> bool {
        let guard = self.token.read().unwrap();
        guard.is_none()
    }

    /// Drop the stored token
    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap();
        *guard = None;
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
