//! Client-side uniqueness check for students.
//!
//! A best-effort scan of the cached student list. The cache can be stale,
//! so the server's own constraint stays authoritative and its error is
//! surfaced when this check passes but the write is still rejected.

use crate::draft::StudentDraft;
use crate::error::{Error, Result};
use crate::ids::RecordId;
use crate::model::Student;

/// Message for a duplicate student number.
pub const DUPLICATE_NUMBER: &str = "Student number already exists";

/// Message for a duplicate email.
pub const DUPLICATE_EMAIL: &str = "Email already exists";

/// Rejects `draft` if its student number, or its email when non-empty,
/// matches another cached student. The record being edited is exempt.
///
/// The number is checked first; only one conflict is reported.
pub fn check_student_uniqueness(
    draft: &StudentDraft,
    students: &[Student],
    editing: Option<RecordId>,
) -> Result<()> {
    let others = || students.iter().filter(move |s| Some(s.id) != editing);

    if others().any(|s| s.student_number == draft.student_number) {
        return Err(Error::conflict("student_number", DUPLICATE_NUMBER));
    }

    if !draft.email.is_empty()
        && others().any(|s| s.email.as_deref() == Some(draft.email.as_str()))
    {
        return Err(Error::conflict("email", DUPLICATE_EMAIL));
    }

    Ok(())
}
