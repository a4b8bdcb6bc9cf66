//! # Session Store
//!
//! Holds the authentication token and user profile for the lifetime of a
//! session, backed by a single JSON document on disk.
//!
//! The store is an explicit object injected into the API client rather than
//! ambient global state: every outgoing request reads the stored user id from
//! it to attach the identity header, and login/register write into it on
//! success.
//!
//! Both fields live in one document so [`SessionStore::set_auth`] is atomic:
//! a reader observes token and user together or not at all. The file is
//! written via a temp file and rename. There is no token refresh and no
//! expiry handling: one round trip per auth call, and the session lives until
//! an explicit [`SessionStore::clear_auth`] or the file is removed.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::dto::auth::UserInfo;
use std::fs;
use std::path::PathBuf;

use crate::core::error::Result;

/// Persisted credential pair: the opaque service token plus the profile
/// snapshot returned alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct AuthSession {
    token: String,
    user: UserInfo,
}

/// Token + user profile store, optionally persisted to disk.
pub struct SessionStore {
    path: Option<PathBuf>,
    state: RwLock<Option<AuthSession>>,
}

impl SessionStore {
    /// Open a file-backed store, loading any previously persisted session.
    ///
    /// A missing file means "never authenticated". A corrupt or unreadable
    /// file is discarded with a warning rather than failing the open; the
    /// next successful login overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<AuthSession>(&bytes) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Discarding corrupt session file");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            path: Some(path),
            state: RwLock::new(state),
        }
    }

    /// In-memory store with no persistence. Useful for tests and ephemeral
    /// sessions.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: RwLock::new(None),
        }
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.token.clone())
    }

    /// The stored user profile, if any.
    pub fn user(&self) -> Option<UserInfo> {
        self.state.read().as_ref().map(|s| s.user.clone())
    }

    /// The stored user's numeric id, used for the identity header.
    pub fn user_id(&self) -> Option<i64> {
        self.state.read().as_ref().map(|s| s.user.id)
    }

    /// True iff a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_some()
    }

    /// Store token and user together.
    ///
    /// Persists first, then publishes to readers, so a failed write leaves
    /// the previously observed session intact.
    pub fn set_auth(&self, token: &str, user: &UserInfo) -> Result<()> {
        let session = AuthSession {
            token: token.to_string(),
            user: user.clone(),
        };
        self.persist(&session)?;
        *self.state.write() = Some(session);
        Ok(())
    }

    /// Remove both fields; `is_authenticated` reports false afterwards.
    pub fn clear_auth(&self) -> Result<()> {
        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        *self.state.write() = None;
        Ok(())
    }

    fn persist(&self, session: &AuthSession) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(session)
            .map_err(|e| crate::core::error::ClientError::Storage(e.to_string()))?;

        // Temp file + rename keeps the on-disk document whole even if the
        // process dies mid-write.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(id: i64) -> UserInfo {
        UserInfo {
            id,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            balance: 1000,
            rating: 0.0,
            reviews_count: 0,
        }
    }

    #[test]
    fn starts_unauthenticated() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(store.user_id().is_none());
    }

    #[test]
    fn set_auth_publishes_both_fields() {
        let store = SessionStore::in_memory();
        store.set_auth("tok-1", &test_user(7)).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token().unwrap(), "tok-1");
        assert_eq!(store.user().unwrap().id, 7);
        assert_eq!(store.user_id(), Some(7));
    }

    #[test]
    fn clear_auth_removes_both_fields() {
        let store = SessionStore::in_memory();
        store.set_auth("tok-1", &test_user(7)).unwrap();
        store.clear_auth().unwrap();

        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }
}
