//! Session state with write-through persistence.
//!
//! One [`SessionState`] exists per process. It is hydrated from storage when
//! constructed and passed by reference to everything that needs to know who
//! the user is or which server they target.
//!
//! # Invariants
//!
//! - `token` is empty if and only if the session is unauthenticated.
//! - Every mutating call writes to storage before it returns; there is no
//!   deferred flush.
//! - Mutations are all-or-nothing: the three keys are written in one
//!   [`Storage::apply`] batch and memory is only updated once it succeeds, so
//!   a storage error leaves both memory and storage as they were.

use crate::{
    error::StorageError,
    storage::{Storage, StorageOp},
};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the display name.
pub const USERNAME_KEY: &str = "username";
/// Storage key of the server identifier.
pub const HOSTNAME_KEY: &str = "hostname";

/// The user's credential and target-server identity.
pub struct SessionState<S: Storage> {
    token: String,
    username: String,
    hostname: String,
    storage: S,
}

// Token stays out of logs.
impl<S: Storage> std::fmt::Debug for SessionState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("authenticated", &self.is_authenticated())
            .field("username", &self.username)
            .field("hostname", &self.hostname)
            .finish_non_exhaustive()
    }
}

impl<S: Storage> SessionState<S> {
    /// Construct the session from whatever `storage` holds.
    ///
    /// Missing keys hydrate as empty strings.
    pub fn hydrate(storage: S) -> Result<Self, StorageError> {
        let token = storage.get(TOKEN_KEY)?.unwrap_or_default();
        let username = storage.get(USERNAME_KEY)?.unwrap_or_default();
        let hostname = storage.get(HOSTNAME_KEY)?.unwrap_or_default();

        tracing::debug!(
            authenticated = !token.is_empty(),
            username = %username,
            hostname = %hostname,
            "session hydrated"
        );

        Ok(Self { token, username, hostname, storage })
    }

    /// Bearer token, empty when unauthenticated.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Display name of the logged-in user.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Server identifier the session targets.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// True when a token is held.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Store the result of a successful login.
    ///
    /// On a storage error nothing changes.
    pub fn set_credentials(
        &mut self,
        token: impl Into<String>,
        username: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Result<(), StorageError> {
        let token = token.into();
        let username = username.into();
        let hostname = hostname.into();

        self.storage.apply(&[
            StorageOp::Set(TOKEN_KEY, &token),
            StorageOp::Set(USERNAME_KEY, &username),
            StorageOp::Set(HOSTNAME_KEY, &hostname),
        ])?;
        self.token = token;
        self.username = username;
        self.hostname = hostname;

        tracing::info!(username = %self.username, hostname = %self.hostname, "session started");
        Ok(())
    }

    /// Log out: reset all fields and remove all keys.
    ///
    /// Idempotent. On a storage error nothing changes.
    pub fn clear_session(&mut self) -> Result<(), StorageError> {
        self.storage.apply(&[
            StorageOp::Remove(TOKEN_KEY),
            StorageOp::Remove(USERNAME_KEY),
            StorageOp::Remove(HOSTNAME_KEY),
        ])?;
        self.token.clear();
        self.username.clear();
        self.hostname.clear();

        tracing::info!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn empty_storage_is_unauthenticated() {
        let session = SessionState::hydrate(MemoryStorage::new()).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), "");
        assert_eq!(session.username(), "");
        assert_eq!(session.hostname(), "");
    }

    #[test]
    fn hydrate_reads_existing_keys() {
        let mut storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "t0").unwrap();
        storage.set(HOSTNAME_KEY, "db.internal").unwrap();

        let session = SessionState::hydrate(storage).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.username(), "");
        assert_eq!(session.hostname(), "db.internal");
    }

    #[test]
    fn set_credentials_writes_through() {
        let mut session = SessionState::hydrate(MemoryStorage::new()).unwrap();
        session.set_credentials("t1", "u1", "1.2.3.4").unwrap();

        assert_eq!(session.storage().get(TOKEN_KEY).unwrap().as_deref(), Some("t1"));
        assert_eq!(session.storage().get(USERNAME_KEY).unwrap().as_deref(), Some("u1"));
        assert_eq!(session.storage().get(HOSTNAME_KEY).unwrap().as_deref(), Some("1.2.3.4"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_then_hydrate_is_empty() {
        let mut storage = MemoryStorage::new();
        {
            let mut session = SessionState::hydrate(&mut storage).unwrap();
            session.set_credentials("t1", "u1", "1.2.3.4").unwrap();
            session.clear_session().unwrap();
        }

        let session = SessionState::hydrate(storage).unwrap();
        assert_eq!(session.token(), "");
        assert_eq!(session.username(), "");
        assert_eq!(session.hostname(), "");
        assert!(session.storage().is_empty());
    }

    /// Rejects every batch once `remaining` batches have gone through.
    struct FlakyStorage {
        inner: MemoryStorage,
        remaining: usize,
    }

    impl Storage for FlakyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.apply(&[StorageOp::Set(key, value)])
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.apply(&[StorageOp::Remove(key)])
        }

        fn apply(&mut self, ops: &[StorageOp<'_>]) -> Result<(), StorageError> {
            if self.remaining == 0 {
                return Err(StorageError::Database("disk full".into()));
            }
            self.remaining -= 1;
            self.inner.apply(ops)
        }
    }

    fn flaky(remaining: usize) -> SessionState<FlakyStorage> {
        SessionState::hydrate(FlakyStorage { inner: MemoryStorage::new(), remaining }).unwrap()
    }

    #[test]
    fn failed_clear_keeps_whole_session() {
        let mut session = flaky(1);
        session.set_credentials("t1", "u1", "1.2.3.4").unwrap();

        assert!(session.clear_session().is_err());

        assert_eq!(session.token(), "t1");
        assert_eq!(session.username(), "u1");
        assert_eq!(session.hostname(), "1.2.3.4");
        assert_eq!(session.storage().inner.len(), 3);
        assert_eq!(session.storage().inner.get(TOKEN_KEY).unwrap().as_deref(), Some("t1"));
    }

    #[test]
    fn failed_login_leaves_session_empty() {
        let mut session = flaky(0);

        assert!(session.set_credentials("t1", "u1", "1.2.3.4").is_err());

        assert!(!session.is_authenticated());
        assert_eq!(session.username(), "");
        assert_eq!(session.hostname(), "");
        assert!(session.storage().inner.is_empty());
    }

    #[test]
    fn failed_relogin_keeps_previous_session() {
        let mut session = flaky(1);
        session.set_credentials("t1", "u1", "1.2.3.4").unwrap();

        assert!(session.set_credentials("t2", "u2", "db.example.com").is_err());

        assert_eq!(session.token(), "t1");
        assert_eq!(session.hostname(), "1.2.3.4");
        assert_eq!(session.storage().inner.get(HOSTNAME_KEY).unwrap().as_deref(), Some("1.2.3.4"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut session = SessionState::hydrate(MemoryStorage::new()).unwrap();
        session.set_credentials("t1", "u1", "example.com").unwrap();
        session.clear_session().unwrap();
        session.clear_session().unwrap();
        assert!(!session.is_authenticated());
        assert!(session.storage().is_empty());
    }
}
