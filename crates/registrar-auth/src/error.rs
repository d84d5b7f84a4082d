//! Auth-specific error types.

use std::path::PathBuf;

/// Errors that can occur while managing the session.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Username or password left empty on the login form.
    #[error("{}", crate::login::LOGIN_FIELDS_REQUIRED)]
    MissingCredentials,

    /// A role string that is not one of the console roles.
    #[error("unknown role: '{0}'")]
    UnknownRole(String),

    /// No platform directory to keep the session file in.
    #[error("could not determine a data directory for the session file")]
    NoDataDir,

    /// Reading or writing the session file failed.
    #[error("session storage error at {path}: {source}")]
    Storage {
        /// Session file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The session file is not valid JSON.
    #[error("corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl AuthError {
    /// Creates a storage error for `path`.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuthError::Storage {
            path: path.into(),
            source,
        }
    }
}
