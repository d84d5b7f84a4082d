use registrar_client::{ResponseShape, Routes};
use registrar_core::{Faculty, FacultyDraft};

use crate::resource::{Mutation, Resource, SERVER_UNREACHABLE};

/// Faculty accounts, served by the registrar endpoints.
///
/// Every response is wrapped in `{success, message?, faculty?}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacultyMembers;

impl Resource for FacultyMembers {
    type Entity = Faculty;
    type Draft = FacultyDraft;

    const NOUN: &'static str = "Faculty";
    const PLURAL: &'static str = "faculty";
    const ROUTES: Routes = Routes {
        list: "registrar/faculty-list",
        create: "registrar/register-faculty",
        item_prefix: "registrar/faculty",
    };
    const SHAPE: ResponseShape = ResponseShape::Envelope { list_key: "faculty" };

    fn success_message(mutation: Mutation, _draft: &FacultyDraft) -> String {
        match mutation {
            Mutation::Create => "Faculty registered successfully!".to_string(),
            Mutation::Update => "Faculty updated successfully!".to_string(),
            Mutation::Delete => "Faculty deleted successfully".to_string(),
        }
    }

    fn transport_message(mutation: Mutation) -> String {
        match mutation {
            Mutation::Create | Mutation::Update => SERVER_UNREACHABLE.to_string(),
            Mutation::Delete => Self::failure_message(mutation),
        }
    }
}
