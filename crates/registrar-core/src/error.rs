//! Error types for registrar-core.

/// Errors raised while validating form drafts.
///
/// Validation and conflict messages are shown to the user as-is, so their
/// `Display` output is the bare message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required field is empty.
    #[error("{message}")]
    Validation {
        /// First field found missing, if known
        field: Option<String>,
        /// User-facing message
        message: String,
    },

    /// A value collides with another cached record.
    #[error("{message}")]
    Conflict {
        /// Field holding the duplicate value
        field: String,
        /// User-facing message
        message: String,
    },
}

/// Convenience `Result` type alias for registrar-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new uniqueness conflict on `field`.
    pub fn conflict<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors detected locally before any request.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::Conflict { .. })
    }
}
