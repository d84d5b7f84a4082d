//! Error types for registrar-client

use thiserror::Error;

/// Result type alias for registrar-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the records API
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from registrar-core
    #[error(transparent)]
    Core(#[from] registrar_core::Error),

    /// Error from registrar-auth
    #[error(transparent)]
    Auth(#[from] registrar_auth::AuthError),

    /// The request never produced a response (connection refused, DNS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error (HTTP {status}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Api {
        /// HTTP status code
        status: u16,
        /// `error` or `message` field of the body, if any
        message: Option<String>,
    },

    /// A 2xx envelope carrying `success: false`.
    #[error("Request rejected{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected {
        /// `error` or `message` field of the envelope, if any
        message: Option<String>,
    },

    /// The body did not have the expected structure.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bad client configuration (e.g. an unparsable base URL)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// The server-supplied message, for errors the server reported.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } | Error::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` when no response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` for validation and uniqueness failures caught before
    /// any request was made.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::Core(e) if e.is_local())
    }
}
