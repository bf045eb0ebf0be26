//! Session state and credential persistence
//!
//! The session is the only state slice that survives restarts. The token
//! and the serialized identity live under fixed storage keys and are
//! written on login success and cleared together on logout; collection
//! state is always refetched fresh.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use wayfare_domain::User;

/// Storage key for the credential token.
pub const KEY_TOKEN: &str = "token";
/// Storage key for the serialized identity.
pub const KEY_USER: &str = "user";

/// Key/value persistence for session credentials.
///
/// Values are opaque strings; the identity is stored as its JSON
/// serialization. Writes are synchronous and infrequent.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&mut self, key: &str) -> Result<(), SessionError>;
}

/// In-memory credential store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: HashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed credential store: a single JSON map on disk, rewritten on
/// every mutation.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading any existing values.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    fn persist(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

/// The authenticated identity and credential token.
///
/// Read by every other component to gate mutation and ownership checks;
/// only login and logout mutate it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    /// Empty, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted session, if one exists.
    ///
    /// A corrupt persisted identity yields an unauthenticated session
    /// rather than an error; the user just logs in again.
    pub fn restore(store: &dyn CredentialStore) -> Result<Self, SessionError> {
        let token = store.get(KEY_TOKEN)?;
        let user = match store.get(KEY_USER)? {
            Some(raw) => serde_json::from_str(&raw).ok(),
            None => None,
        };
        Ok(Self { user, token })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Email of the authenticated identity, used for ownership checks.
    pub fn identity_email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Record a successful login and persist both credential keys.
    pub fn login(
        &mut self,
        user: User,
        jwt: impl Into<String>,
        store: &mut dyn CredentialStore,
    ) -> Result<(), SessionError> {
        let jwt = jwt.into();
        store.set(KEY_TOKEN, &jwt)?;
        store.set(KEY_USER, &serde_json::to_string(&user)?)?;
        self.user = Some(user);
        self.token = Some(jwt);
        Ok(())
    }

    /// Clear the session and both persisted keys.
    pub fn logout(&mut self, store: &mut dyn CredentialStore) -> Result<(), SessionError> {
        store.remove(KEY_TOKEN)?;
        store.remove(KEY_USER)?;
        self.user = None;
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(7, "alice", "a@x.com")
    }

    #[test]
    fn test_login_persists_both_keys() {
        let mut store = MemoryCredentialStore::new();
        let mut session = SessionState::new();
        session.login(test_user(), "jwt-abc", &mut store).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.identity_email(), Some("a@x.com"));
        assert_eq!(store.get(KEY_TOKEN).unwrap().as_deref(), Some("jwt-abc"));
        assert!(store.get(KEY_USER).unwrap().is_some());
    }

    #[test]
    fn test_logout_clears_both_keys() {
        let mut store = MemoryCredentialStore::new();
        let mut session = SessionState::new();
        session.login(test_user(), "jwt-abc", &mut store).unwrap();
        session.logout(&mut store).unwrap();

        assert!(!session.is_authenticated());
        assert!(session.identity_email().is_none());
        assert!(store.get(KEY_TOKEN).unwrap().is_none());
        assert!(store.get(KEY_USER).unwrap().is_none());
    }

    #[test]
    fn test_restore_round_trip() {
        let mut store = MemoryCredentialStore::new();
        let mut session = SessionState::new();
        session.login(test_user(), "jwt-abc", &mut store).unwrap();

        let restored = SessionState::restore(&store).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_restore_empty_store_is_unauthenticated() {
        let store = MemoryCredentialStore::new();
        let session = SessionState::restore(&store).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_restore_with_corrupt_identity_drops_user() {
        let mut store = MemoryCredentialStore::new();
        store.set(KEY_TOKEN, "jwt-abc").unwrap();
        store.set(KEY_USER, "{not json").unwrap();

        let session = SessionState::restore(&store).unwrap();
        assert!(session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let mut store = FileCredentialStore::open(&path).unwrap();
            let mut session = SessionState::new();
            session.login(test_user(), "jwt-abc", &mut store).unwrap();
        }

        // Reopen from disk, as on a fresh launch.
        let store = FileCredentialStore::open(&path).unwrap();
        let session = SessionState::restore(&store).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.identity_email(), Some("a@x.com"));
    }

    #[test]
    fn test_file_store_logout_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileCredentialStore::open(&path).unwrap();
        let mut session = SessionState::new();
        session.login(test_user(), "jwt-abc", &mut store).unwrap();
        session.logout(&mut store).unwrap();
        drop(store);

        let store = FileCredentialStore::open(&path).unwrap();
        let session = SessionState::restore(&store).unwrap();
        assert!(!session.is_authenticated());
    }
}
