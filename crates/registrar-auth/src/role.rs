//! Console roles and their landing routes.

use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

/// Entry point for unauthenticated users.
pub const LOGIN_ROUTE: &str = "/login";

/// Application root.
pub const ROOT_ROUTE: &str = "/";

/// A console role. Stored and sent in lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Teaching staff
    Faculty,
    /// System administrator
    Admin,
    /// Registrar staff; owns the records dashboard
    Registrar,
}

impl Role {
    /// Every role, in login-form order.
    pub const ALL: [Role; 3] = [Role::Faculty, Role::Admin, Role::Registrar];

    /// Lower-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Faculty => "faculty",
            Role::Admin => "admin",
            Role::Registrar => "registrar",
        }
    }

    /// Route shown after a successful login.
    pub fn landing_route(self) -> &'static str {
        match self {
            Role::Faculty => "/faculty-dashboard",
            Role::Admin => "/admin-dashboard",
            Role::Registrar => "/registrar-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    /// Case-insensitive: "Admin" parses as [`Role::Admin`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == lowered)
            .ok_or_else(|| AuthError::UnknownRole(s.to_string()))
    }
}
