//! Server-owned records.
//!
//! The console holds a cached, possibly stale copy of each collection,
//! refetched after every mutation. Field names match the registrar API.

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

/// Employment types offered by the faculty form.
pub const EMPLOYMENT_TYPES: [&str; 2] = ["Full-Time", "Part-Time"];

/// Common behaviour of every record kind.
pub trait Record {
    /// The record's server-assigned identifier.
    fn id(&self) -> RecordId;
}

/// A college, parent of programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    /// Identifier
    pub id: RecordId,
    /// Short code, e.g. "CCS"
    pub code: String,
    /// Display name
    pub name: String,
}

/// A degree program belonging to a college.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Identifier
    pub id: RecordId,
    /// Owning college
    pub college_id: RecordId,
    /// Display name
    pub name: String,
}

/// A class section belonging to a program.
///
/// `college_id`, `college_name` and `program_name` are denormalized by the
/// backend and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier
    pub id: RecordId,
    /// Owning program
    pub program_id: RecordId,
    /// Section code, e.g. "BSCS-1A"
    pub section_code: String,
    /// Owning program's name
    #[serde(default)]
    pub program_name: Option<String>,
    /// College of the owning program
    #[serde(default)]
    pub college_id: Option<RecordId>,
    /// Name of that college
    #[serde(default)]
    pub college_name: Option<String>,
}

/// A faculty account. The password is write-only and never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Identifier
    pub id: RecordId,
    /// Full display name
    pub full_name: String,
    /// Login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// One of [`EMPLOYMENT_TYPES`], as stored by the server
    pub employment_type: String,
}

/// An enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Identifier
    pub id: RecordId,
    /// Registrar-issued number, e.g. "2021-0001"
    pub student_number: String,
    /// Given name
    pub first_name: String,
    /// Middle name
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Family name
    pub last_name: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Enrolled section
    pub section_id: RecordId,
    /// Code of the enrolled section, denormalized by the backend
    #[serde(default)]
    pub section_code: Option<String>,
    /// Creation timestamp as sent by the server
    #[serde(default)]
    pub created_at: Option<String>,
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> RecordId {
                    self.id
                }
            }
        )*
    };
}

impl_record!(College, Program, Section, Faculty, Student);
