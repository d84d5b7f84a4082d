use registrar_client::Routes;
use registrar_core::search::Searchable;
use registrar_core::unique::check_student_uniqueness;
use registrar_core::{RecordId, Student, StudentDraft};

use crate::resource::{Lookup, Mutation, Resource};

/// Students, each placed in a section.
///
/// Student numbers and non-empty emails are checked against the cached
/// list before anything is sent; the server still has the final say.
#[derive(Debug, Clone, Copy, Default)]
pub struct Students;

impl Resource for Students {
    type Entity = Student;
    type Draft = StudentDraft;

    const NOUN: &'static str = "Student";
    const PLURAL: &'static str = "students";
    const ROUTES: Routes = Routes {
        list: "students",
        create: "students/",
        item_prefix: "students",
    };

    fn lookups() -> Vec<Lookup> {
        vec![super::section_lookup()]
    }

    fn selection_of(student: &Student) -> Vec<Option<RecordId>> {
        vec![Some(student.section_id)]
    }

    fn apply_selection(draft: &mut StudentDraft, selections: &[Option<RecordId>]) {
        draft.section_id = selections.first().copied().flatten();
    }

    fn check(
        draft: &StudentDraft,
        collection: &[Student],
        editing: Option<RecordId>,
    ) -> registrar_core::Result<()> {
        check_student_uniqueness(draft, collection, editing)
    }

    fn matches(student: &Student, query: &str) -> bool {
        Searchable::matches(student, query)
    }

    fn success_message(mutation: Mutation, draft: &StudentDraft) -> String {
        match mutation {
            Mutation::Create => format!("Student {} registered successfully!", draft.display_name()),
            Mutation::Update => format!("Student {} updated successfully!", draft.display_name()),
            Mutation::Delete => "Student deleted successfully".to_string(),
        }
    }

    fn failure_message(mutation: Mutation) -> String {
        match mutation {
            Mutation::Create => "Failed to register student",
            Mutation::Update => "Failed to update student",
            Mutation::Delete => "Failed to delete student",
        }
        .to_string()
    }
}
