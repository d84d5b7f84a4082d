//! The session gate.
//!
//! [`admit`] is the bare predicate; [`Guard`] binds it to a set of allowed
//! roles and a redirect target and evaluates it against a
//! [`SessionContext`].

use serde::{Deserialize, Serialize};

use crate::login::normalize_role;
use crate::role::{LOGIN_ROUTE, ROOT_ROUTE};
use crate::session::SessionContext;

/// `true` iff a token is present, a role is present, and the role is one
/// of `allowed`. Empty strings count as absent.
pub fn admit<S: AsRef<str>>(token: Option<&str>, role: Option<&str>, allowed: &[S]) -> bool {
    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }
    match (present(token), present(role)) {
        (Some(_), Some(role)) => allowed.iter().any(|a| a.as_ref() == role),
        _ => false,
    }
}

/// Where a rejected visitor is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectTarget {
    /// The application root, `/`
    Root,
    /// The login page, `/login`
    #[default]
    Login,
}

impl RedirectTarget {
    /// Route path of the target.
    pub fn path(self) -> &'static str {
        match self {
            RedirectTarget::Root => ROOT_ROUTE,
            RedirectTarget::Login => LOGIN_ROUTE,
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested view.
    Admit,
    /// Send the visitor to this route instead.
    Redirect(&'static str),
}

impl GateDecision {
    /// Returns `true` for [`GateDecision::Admit`].
    pub fn is_admitted(self) -> bool {
        matches!(self, GateDecision::Admit)
    }
}

/// A route guard: allowed roles plus a redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guard {
    allowed: Vec<String>,
    redirect: RedirectTarget,
}

impl Guard {
    /// A guard admitting `allowed` roles, redirecting to the login page.
    ///
    /// Roles are lower-cased, matching how sessions store them.
    pub fn new<S: AsRef<str>>(allowed: &[S]) -> Self {
        Self {
            allowed: allowed.iter().map(|r| normalize_role(r.as_ref())).collect(),
            redirect: RedirectTarget::default(),
        }
    }

    /// Use `redirect` for rejected visitors.
    pub fn with_redirect(mut self, redirect: RedirectTarget) -> Self {
        self.redirect = redirect;
        self
    }

    /// Evaluate the gate for the current session.
    pub fn check(&self, session: &SessionContext) -> GateDecision {
        let current = session.current();
        let token = current.as_ref().map(|s| s.token.as_str());
        let role = current.as_ref().map(|s| s.role.as_str());
        if admit(token, role, &self.allowed) {
            GateDecision::Admit
        } else {
            log::debug!(
                "Gate rejected role {:?}; redirecting to {}",
                role,
                self.redirect.path()
            );
            GateDecision::Redirect(self.redirect.path())
        }
    }
}
