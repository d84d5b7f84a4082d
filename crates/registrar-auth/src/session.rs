//! The logged-in session and its explicit lifecycle.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::store::{MemorySessionStore, SessionStore};

/// Token and role persisted at login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token issued by the login endpoint
    pub token: String,
    /// Lower-cased role
    pub role: String,
}

impl Session {
    /// Create a session; the role is stored lower-cased.
    pub fn new(token: impl Into<String>, role: &str) -> Self {
        Self {
            token: token.into(),
            role: crate::login::normalize_role(role),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Shared session state, injected into the session gate and the HTTP
/// client instead of being read from ambient storage.
///
/// The in-memory copy is loaded from the store once, on construction.
/// [`init`](Self::init) and [`clear`](Self::clear) write through to the store.
pub struct SessionContext {
    store: Box<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    /// Create a context backed by `store`, picking up any persisted session.
    ///
    /// An unreadable store is treated as logged out.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        let current = match store.load() {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Ignoring unreadable session: {e}");
                None
            }
        };
        Self {
            store: Box::new(store),
            current: RwLock::new(current),
        }
    }

    /// A context that persists nothing (tests, one-shot tools).
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStore::default())
    }

    /// Start a session (on login).
    pub fn init(&self, session: Session) -> Result<(), AuthError> {
        self.store.save(&session)?;
        log::info!("Session started for role '{}'", session.role);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
        Ok(())
    }

    /// End the session (on logout).
    pub fn clear(&self) -> Result<(), AuthError> {
        self.store.clear()?;
        log::info!("Session cleared");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }

    /// The current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }

    /// The current role, if any.
    pub fn role(&self) -> Option<String> {
        self.current().map(|s| s.role)
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("current", &self.current())
            .finish()
    }
}
