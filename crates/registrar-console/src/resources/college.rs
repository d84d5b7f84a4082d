use registrar_client::Routes;
use registrar_core::{College, CollegeDraft};

use crate::resource::{Mutation, Resource};

/// Colleges: code and name, no parents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colleges;

impl Resource for Colleges {
    type Entity = College;
    type Draft = CollegeDraft;

    const NOUN: &'static str = "College";
    const PLURAL: &'static str = "colleges";
    const ROUTES: Routes = Routes::uniform("colleges/", "colleges");

    fn success_message(mutation: Mutation, _draft: &CollegeDraft) -> String {
        match mutation {
            Mutation::Create => "College added successfully!".to_string(),
            Mutation::Update => "College updated successfully!".to_string(),
            Mutation::Delete => "College deleted successfully".to_string(),
        }
    }
}
