//! Error types for registrar-console

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for registrar-console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the views (configuration, session, setup).
///
/// Failures inside a view are recovered into its error message and never
/// surface here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from registrar-client
    #[error(transparent)]
    Client(#[from] registrar_client::Error),

    /// Error from registrar-auth
    #[error(transparent)]
    Auth(#[from] registrar_auth::AuthError),

    /// File I/O error with the offending path
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// The session gate turned the visitor away.
    #[error("Not signed in with a permitted role (redirect to {route}); run `registrar login` first")]
    Redirect {
        /// Where the visitor is sent
        route: &'static str,
    },

    /// A command finished with the view's error message.
    #[error("{0}")]
    Failed(String),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
