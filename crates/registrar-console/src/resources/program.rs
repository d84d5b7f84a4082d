use registrar_client::Routes;
use registrar_core::{Program, ProgramDraft, RecordId};

use crate::resource::{Lookup, Resource};

/// Programs, each owned by a college picked from a dropdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Programs;

impl Resource for Programs {
    type Entity = Program;
    type Draft = ProgramDraft;

    const NOUN: &'static str = "Program";
    const PLURAL: &'static str = "programs";
    const ROUTES: Routes = Routes::uniform("programs/", "programs");

    fn lookups() -> Vec<Lookup> {
        vec![super::college_lookup()]
    }

    fn selection_of(program: &Program) -> Vec<Option<RecordId>> {
        vec![Some(program.college_id)]
    }

    fn apply_selection(draft: &mut ProgramDraft, selections: &[Option<RecordId>]) {
        draft.college_id = selections.first().copied().flatten();
    }
}
