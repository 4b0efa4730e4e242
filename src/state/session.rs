//! Persisted auth session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only authorization signal in the client: the route
//! guard, the login page, and the submission flow all read it through this
//! store, which the root component provides as context. Nothing else tracks
//! whether a user is logged in.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never reach callers. A failed write is logged and the
//! session simply does not persist; malformed stored data reads as absent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::net::types::Identity;
use crate::util::storage::{BrowserStorage, KeyValueStore, MemoryStorage};

/// Storage key holding the JSON-serialized [`Identity`].
pub const SESSION_KEY: &str = "user";

/// Handle to the persisted session. Clones share the same backing storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("key", &SESSION_KEY).finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Session held in memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Persist `identity`, replacing any previous session.
    pub fn save(&self, identity: &Identity) {
        let raw = match serde_json::to_string(identity) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("session: failed to serialize identity: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(SESSION_KEY, &raw) {
            log::warn!("session: not persisted ({e})");
        }
    }

    /// The stored identity, if present and well-formed.
    pub fn load(&self) -> Option<Identity> {
        let raw = self.storage.get(SESSION_KEY)?;
        let identity: Identity = match serde_json::from_str(&raw) {
            Ok(identity) => identity,
            Err(e) => {
                log::warn!("session: ignoring malformed stored identity: {e}");
                return None;
            }
        };
        if let Err(reason) = identity.validate() {
            log::warn!("session: ignoring invalid stored identity: {reason}");
            return None;
        }
        Some(identity)
    }

    /// Remove the stored identity. Clearing an empty session is a no-op.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            log::warn!("session: clear failed ({e})");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }
}
