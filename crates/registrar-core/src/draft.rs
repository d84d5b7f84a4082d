//! In-progress form state.
//!
//! A draft is created empty on mount or cancel, populated from a record by
//! "edit", and discarded after a successful submit. Parent references
//! (`college_id`, `program_id`, `section_id`) are driven by the cascading
//! selector rather than typed in.

use std::fmt;

use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::ids::RecordId;
use crate::model::{College, Faculty, Program, Section, Student};

/// Whether a form creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode {
    /// No record is pinned; submit issues a create.
    Create,
    /// A record is pinned; submit issues a replace of that record.
    Update,
}

/// Form fields for one record kind.
pub trait Draft: Default + Clone + fmt::Debug + Send + Sync + 'static {
    /// Message shown when any required field is empty.
    const REQUIRED_MESSAGE: &'static str;

    /// Names of required fields that are currently empty, in form order.
    fn missing_fields(&self, mode: FormMode) -> Vec<&'static str>;

    /// JSON body sent to the server for `mode`.
    ///
    /// Only meaningful once [`Draft::validate`] has passed.
    fn payload(&self, mode: FormMode) -> Value;

    /// Rejects the draft if any required field is empty.
    fn validate(&self, mode: FormMode) -> Result<()> {
        match self.missing_fields(mode).first() {
            Some(field) => Err(Error::validation_field(*field, Self::REQUIRED_MESSAGE)),
            None => Ok(()),
        }
    }
}

fn collect_missing(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

fn optional(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

// ============================================================================
// College
// ============================================================================

/// College form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollegeDraft {
    /// Short code
    pub code: String,
    /// Display name
    pub name: String,
}

impl Draft for CollegeDraft {
    const REQUIRED_MESSAGE: &'static str = "Both code and name are required";

    fn missing_fields(&self, _mode: FormMode) -> Vec<&'static str> {
        collect_missing(&[("code", !self.code.is_empty()), ("name", !self.name.is_empty())])
    }

    fn payload(&self, _mode: FormMode) -> Value {
        json!({ "code": self.code, "name": self.name })
    }
}

impl From<&College> for CollegeDraft {
    fn from(college: &College) -> Self {
        Self {
            code: college.code.clone(),
            name: college.name.clone(),
        }
    }
}

// ============================================================================
// Program
// ============================================================================

/// Program form. `college_id` follows the college dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramDraft {
    /// Selected college
    pub college_id: Option<RecordId>,
    /// Display name
    pub name: String,
}

impl Draft for ProgramDraft {
    const REQUIRED_MESSAGE: &'static str = "College and program name are required";

    fn missing_fields(&self, _mode: FormMode) -> Vec<&'static str> {
        collect_missing(&[
            ("college_id", self.college_id.is_some()),
            ("name", !self.name.is_empty()),
        ])
    }

    fn payload(&self, _mode: FormMode) -> Value {
        json!({ "college_id": self.college_id, "name": self.name })
    }
}

impl From<&Program> for ProgramDraft {
    fn from(program: &Program) -> Self {
        Self {
            college_id: Some(program.college_id),
            name: program.name.clone(),
        }
    }
}

// ============================================================================
// Section
// ============================================================================

/// Section form.
///
/// `college_id` only scopes the program dropdown; it is not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDraft {
    /// Selected college (scoping only)
    pub college_id: Option<RecordId>,
    /// Selected program
    pub program_id: Option<RecordId>,
    /// Section code
    pub section_code: String,
}

impl Draft for SectionDraft {
    const REQUIRED_MESSAGE: &'static str = "Program and section code are required";

    fn missing_fields(&self, _mode: FormMode) -> Vec<&'static str> {
        collect_missing(&[
            ("program_id", self.program_id.is_some()),
            ("section_code", !self.section_code.trim().is_empty()),
        ])
    }

    fn payload(&self, _mode: FormMode) -> Value {
        json!({ "program_id": self.program_id, "section_code": self.section_code })
    }
}

impl From<&Section> for SectionDraft {
    fn from(section: &Section) -> Self {
        Self {
            college_id: section.college_id,
            program_id: Some(section.program_id),
            section_code: section.section_code.clone(),
        }
    }
}

// ============================================================================
// Faculty
// ============================================================================

/// Faculty form. The password is required and sent on create only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FacultyDraft {
    /// Login name
    pub username: String,
    /// Full display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Initial password (create only)
    pub password: String,
    /// One of [`crate::model::EMPLOYMENT_TYPES`]
    pub employment_type: String,
}

impl fmt::Debug for FacultyDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacultyDraft")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("employment_type", &self.employment_type)
            .finish()
    }
}

impl Draft for FacultyDraft {
    const REQUIRED_MESSAGE: &'static str = "All fields are required";

    fn missing_fields(&self, mode: FormMode) -> Vec<&'static str> {
        collect_missing(&[
            ("username", !self.username.is_empty()),
            ("full_name", !self.full_name.is_empty()),
            ("email", !self.email.is_empty()),
            (
                "password",
                mode == FormMode::Update || !self.password.is_empty(),
            ),
            ("employment_type", !self.employment_type.is_empty()),
        ])
    }

    fn payload(&self, mode: FormMode) -> Value {
        let mut body = json!({
            "username": self.username,
            "full_name": self.full_name,
            "email": self.email,
            "employment_type": self.employment_type,
        });
        if mode == FormMode::Create {
            body["password"] = Value::String(self.password.clone());
        }
        body
    }
}

impl From<&Faculty> for FacultyDraft {
    fn from(faculty: &Faculty) -> Self {
        Self {
            username: faculty.username.clone(),
            full_name: faculty.full_name.clone(),
            email: faculty.email.clone(),
            password: String::new(),
            employment_type: faculty.employment_type.clone(),
        }
    }
}

// ============================================================================
// Student
// ============================================================================

/// Student form. `middle_name` and `email` are optional; empty values are
/// sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    /// Registrar-issued number
    pub student_number: String,
    /// Given name
    pub first_name: String,
    /// Middle name, may be empty
    pub middle_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email, may be empty
    pub email: String,
    /// Selected section
    pub section_id: Option<RecordId>,
}

impl StudentDraft {
    /// "First Last", as used in confirmation messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Draft for StudentDraft {
    const REQUIRED_MESSAGE: &'static str =
        "Student Number, First Name, Last Name, and Section are required";

    fn missing_fields(&self, _mode: FormMode) -> Vec<&'static str> {
        collect_missing(&[
            ("student_number", !self.student_number.is_empty()),
            ("first_name", !self.first_name.is_empty()),
            ("last_name", !self.last_name.is_empty()),
            ("section_id", self.section_id.is_some()),
        ])
    }

    fn payload(&self, _mode: FormMode) -> Value {
        json!({
            "student_number": self.student_number,
            "first_name": self.first_name,
            "middle_name": optional(&self.middle_name),
            "last_name": self.last_name,
            "email": optional(&self.email),
            "section_id": self.section_id,
        })
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            student_number: student.student_number.clone(),
            first_name: student.first_name.clone(),
            middle_name: student.middle_name.clone().unwrap_or_default(),
            last_name: student.last_name.clone(),
            email: student.email.clone().unwrap_or_default(),
            section_id: Some(student.section_id),
        }
    }
}
