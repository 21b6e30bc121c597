//! Persisted credential scopes.
//!
//! The session store is the only shared mutable state in the client. It
//! holds at most one [`Session`] per [`Scope`], and the two scopes live
//! under disjoint storage keys: no operation on one scope can observe or
//! disturb the other. Sessions are only ever written whole or removed
//! whole, so there is no partial-write hazard.
//!
//! The store is an injectable capability rather than an ambient singleton
//! so tests (and alternative frontends) can swap the backing medium.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use thiserror::Error;
use tracing::debug;

use insights_snap_core::{Scope, Session};

/// Errors from reading or writing persisted sessions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying storage failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored session file did not contain a valid session.
    #[error("session data corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Capability for reading and writing per-scope sessions.
///
/// All operations are synchronous: a successful `set` is durable before the
/// call returns, matching the reload-survival guarantee of the browser
/// storage it models.
pub trait SessionStore: Send + Sync {
    /// Read the session for one scope, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage is unreadable or corrupt.
    fn get(&self, scope: Scope) -> Result<Option<Session>, SessionError>;

    /// Replace the session for one scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted.
    fn set(&self, scope: Scope, session: &Session) -> Result<(), SessionError>;

    /// Remove the session for one scope. Clearing an absent session is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be modified.
    fn clear(&self, scope: Scope) -> Result<(), SessionError>;
}

/// Durable session store: one JSON file per scope under a fixed directory.
///
/// Survives process restarts, which makes it the CLI's analogue of
/// browser-local storage.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, SessionError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Storage key for one scope. The namespace prefix keeps the two
    /// scopes' files disjoint.
    fn path(&self, scope: Scope) -> PathBuf {
        self.dir
            .join(format!("{}_session.json", scope.storage_namespace()))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, scope: Scope) -> Result<Option<Session>, SessionError> {
        let path = self.path(scope);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_slice(&bytes)?;
        Ok(Some(session))
    }

    fn set(&self, scope: Scope, session: &Session) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec_pretty(session)?;
        // Write to a sibling temp file and rename so an interrupted write
        // can never leave a half-written session behind.
        let path = self.path(scope);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, &path)?;
        debug!(%scope, "session persisted");
        Ok(())
    }

    fn clear(&self, scope: Scope) -> Result<(), SessionError> {
        match std::fs::remove_file(self.path(scope)) {
            Ok(()) => {
                debug!(%scope, "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<HashMap<Scope, Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, scope: Scope) -> Result<Option<Session>, SessionError> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&scope).cloned())
    }

    fn set(&self, scope: Scope, session: &Session) -> Result<(), SessionError> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(scope, session.clone());
        Ok(())
    }

    fn clear(&self, scope: Scope) -> Result<(), SessionError> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(&scope);
        Ok(())
    }
}
