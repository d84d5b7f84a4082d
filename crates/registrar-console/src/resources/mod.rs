//! The five record kinds managed from the registrar dashboard.

mod college;
mod faculty;
mod program;
mod section;
mod student;

pub use college::Colleges;
pub use faculty::FacultyMembers;
pub use program::Programs;
pub use section::Sections;
pub use student::Students;

use registrar_client::ResponseShape;
use registrar_core::{College, Program, Section};

use crate::resource::Lookup;

fn college_lookup() -> Lookup {
    Lookup::of::<College>("colleges", "colleges/", ResponseShape::Bare)
}

fn program_lookup() -> Lookup {
    Lookup::of::<Program>("programs", "programs/", ResponseShape::Bare)
}

fn section_lookup() -> Lookup {
    Lookup::of::<Section>("sections", "sections", ResponseShape::Bare)
}
