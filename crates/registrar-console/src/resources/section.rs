use registrar_client::Routes;
use registrar_core::{RecordId, Section, SectionDraft};

use crate::resource::{Lookup, Resource, Scope};

/// Sections, listed per program.
///
/// The college dropdown narrows the program dropdown; the selected program
/// scopes the list. With no program selected the list is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sections;

impl Resource for Sections {
    type Entity = Section;
    type Draft = SectionDraft;

    const NOUN: &'static str = "Section";
    const PLURAL: &'static str = "sections";
    const ROUTES: Routes = Routes::uniform("sections/", "sections");
    const SCOPED: bool = true;

    fn lookups() -> Vec<Lookup> {
        vec![super::college_lookup(), super::program_lookup()]
    }

    fn selection_of(section: &Section) -> Vec<Option<RecordId>> {
        vec![section.college_id, Some(section.program_id)]
    }

    fn apply_selection(draft: &mut SectionDraft, selections: &[Option<RecordId>]) {
        draft.college_id = selections.first().copied().flatten();
        draft.program_id = selections.get(1).copied().flatten();
    }

    fn scope(selections: &[Option<RecordId>]) -> Scope {
        let Some(program) = selections.get(1).copied().flatten() else {
            return Scope::Empty;
        };
        let mut params = vec![("program_id", program.to_string())];
        if let Some(college) = selections.first().copied().flatten() {
            params.push(("college_id", college.to_string()));
        }
        Scope::Query(params)
    }

    fn sort(items: &mut [Section]) {
        items.sort_by_key(|section| section.id);
    }
}
