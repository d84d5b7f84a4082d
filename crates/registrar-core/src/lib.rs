#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Registrar Core
//!
//! Records, form drafts, and the selection rules shared by every
//! registry screen. Nothing in this crate performs I/O.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Record identifiers
//! - [`model`]: Server-owned records (College, Program, Section, Faculty, Student)
//! - [`draft`]: In-progress form state and required-field validation
//! - [`unique`]: Client-side student uniqueness check
//! - [`search`]: Case-insensitive substring filtering
//! - [`cascade`]: Dependent dropdown selection (College → Program → Section)

pub mod cascade;
pub mod draft;
pub mod error;
pub mod ids;
pub mod model;
pub mod search;
pub mod unique;

mod proptests;

// Re-exports for convenience
pub use cascade::{CascadingSelector, Choice, IntoChoice};
pub use draft::{
    CollegeDraft, Draft, FacultyDraft, FormMode, ProgramDraft, SectionDraft, StudentDraft,
};
pub use error::{Error, Result};
pub use ids::RecordId;
pub use model::{College, EMPLOYMENT_TYPES, Faculty, Program, Record, Section, Student};
pub use search::Searchable;
