//! # registrar-console
//!
//! The registry screens of the Registrar console, expressed as view state
//! machines a renderer can drive, plus the `registrar` command-line front
//! end that renders them as text.
//!
//! - [`RegistryView`]: list, form, and messages for one [`Resource`]
//! - [`resources`]: the five record kinds (colleges, programs, sections,
//!   faculty, students)
//! - [`Dashboard`]: the tab container that mounts every view
//! - [`login`] / [`logout`]: the session lifecycle
//! - [`ConsoleConfig`]: TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod resource;
pub mod resources;
pub mod session;
pub mod view;

pub use config::ConsoleConfig;
pub use confirm::{AssumeYes, Confirm, StdinConfirm};
pub use dashboard::{Dashboard, Tab};
pub use error::{Error, Result};
pub use resource::{Lookup, Mutation, Resource, Scope};
pub use session::{LoginError, login, logout};
pub use view::{RegistryView, ViewSnapshot};
