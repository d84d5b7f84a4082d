//! Session primitives for the Registrar console.
//!
//! Provides:
//! - [`Role`]: The three console roles and their landing routes
//! - [`Session`] / [`SessionContext`]: The token/role pair, with explicit
//!   `init` (login) and `clear` (logout)
//! - [`SessionStore`]: Durable storage for the session ([`FileSessionStore`],
//!   [`MemorySessionStore`])
//! - [`admit`] / [`Guard`]: The session gate used to protect views
//! - [`LoginRequest`] / [`LoginResponse`]: Login wire types
//! - [`AuthError`]: Auth-specific error types
//!
//! The gate is advisory: the token is never verified client-side and the
//! server authorizes every request on its own.

mod error;
mod gate;
mod login;
mod role;
mod session;
mod store;

pub use error::AuthError;
pub use gate::{GateDecision, Guard, RedirectTarget, admit};
pub use login::{LOGIN_FIELDS_REQUIRED, LoginRequest, LoginResponse, normalize_role};
pub use role::{LOGIN_ROUTE, ROOT_ROUTE, Role};
pub use session::{Session, SessionContext};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
