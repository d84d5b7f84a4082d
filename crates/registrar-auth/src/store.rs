//! Durable storage for the session.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::AuthError;
use crate::session::Session;

/// Where the token/role pair survives between runs.
pub trait SessionStore: Send + Sync {
    /// The stored session, or `None` if logged out.
    fn load(&self) -> Result<Option<Session>, AuthError>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<(), AuthError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), AuthError>;
}

/// Session kept as a small JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/registrar/session.json` for this platform.
    pub fn default_path() -> Result<PathBuf, AuthError> {
        dirs::data_dir()
            .map(|dir| dir.join("registrar").join("session.json"))
            .ok_or(AuthError::NoDataDir)
    }

    /// The session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::storage(&self.path, e)),
        }
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AuthError::storage(parent, e))?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json).map_err(|e| AuthError::storage(&self.path, e))?;
        log::debug!("Session written to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::storage(&self.path, e)),
        }
    }
}

/// Session kept in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
