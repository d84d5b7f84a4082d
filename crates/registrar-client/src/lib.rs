//! # registrar-client
//!
//! REST client for the Registrar records API.
//!
//! - [`ApiClient`]: the four verbs every registry screen needs, behind a
//!   trait so views can be driven by scripted clients in tests
//! - [`HttpApiClient`]: the `reqwest` implementation, attaching the bearer
//!   token from an injected [`registrar_auth::SessionContext`]
//! - [`Routes`] / [`ResponseShape`]: per-resource paths and response
//!   envelopes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod shape;

pub use client::{ApiClient, HttpApiClient, Query};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use routes::Routes;
pub use shape::{ResponseShape, message_of};
