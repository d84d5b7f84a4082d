//! Login wire types.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Shown when the login form is submitted with an empty field.
pub const LOGIN_FIELDS_REQUIRED: &str = "Please enter username, password, and select role";

/// Lower-cases a role as typed or selected by the user.
///
/// Applied before the request body is built and before the post-login
/// redirect is chosen, so "Admin" and "admin" behave the same.
pub fn normalize_role(role: &str) -> String {
    role.to_lowercase()
}

/// Body of `POST login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Account name
    pub username: String,
    /// Plain-text password, sent over the API's transport
    pub password: String,
    /// Lower-cased role
    pub role: String,
}

impl LoginRequest {
    /// Build a request, normalizing the role.
    ///
    /// Fails with [`AuthError::MissingCredentials`] if the username or
    /// password is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: &str,
    ) -> Result<Self, AuthError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Self {
            username,
            password,
            role: normalize_role(role),
        })
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Body returned by `POST login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted
    #[serde(default)]
    pub success: bool,
    /// Session token, present on success
    #[serde(default)]
    pub token: Option<String>,
    /// Human-readable failure reason
    #[serde(default)]
    pub message: Option<String>,
}
