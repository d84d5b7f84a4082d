//! Per-record-kind definitions driving the generic registry view.
//!
//! A [`Resource`] names the REST paths, response shape, parent lookups,
//! and user-facing messages of one record kind. Everything else (list
//! reloads, form lifecycle, stale-response handling) lives once in
//! [`crate::RegistryView`].

use std::fmt;

use registrar_client::{Error as ClientError, ResponseShape, Routes};
use registrar_core::{Choice, Draft, FormMode, IntoChoice, Record, RecordId};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Fallback message for a failed create or update.
pub const OPERATION_FAILED: &str = "Operation failed";

/// Fallback message when no response was received.
pub const SERVER_UNREACHABLE: &str = "Server not reachable";

/// A server-side change issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// `POST` to the create path
    Create,
    /// `PUT` to the item path
    Update,
    /// `DELETE` of the item path
    Delete,
}

impl From<FormMode> for Mutation {
    fn from(mode: FormMode) -> Self {
        match mode {
            FormMode::Create => Mutation::Create,
            FormMode::Update => Mutation::Update,
        }
    }
}

/// Which slice of the collection a list request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The whole collection, no parameters
    All,
    /// A filtered collection
    Query(Vec<(&'static str, String)>),
    /// Nothing to ask for; the collection is emptied without a request
    Empty,
}

/// A parent collection feeding one level of the cascading selector.
#[derive(Clone, Copy)]
pub struct Lookup {
    /// Plural name, used in "Failed to fetch <plural>"
    pub plural: &'static str,
    /// `GET` path of the collection
    pub path: &'static str,
    /// Response shape of the collection
    pub shape: ResponseShape,
    decode: fn(ResponseShape, Value) -> Result<Vec<Choice>, ClientError>,
}

impl Lookup {
    /// A lookup over records of type `T`.
    pub fn of<T>(plural: &'static str, path: &'static str, shape: ResponseShape) -> Self
    where
        T: DeserializeOwned + IntoChoice,
    {
        Self {
            plural,
            path,
            shape,
            decode: decode_choices::<T>,
        }
    }

    /// Turn a list response into selector options.
    pub fn decode(&self, body: Value) -> Result<Vec<Choice>, ClientError> {
        (self.decode)(self.shape, body)
    }
}

impl fmt::Debug for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookup")
            .field("plural", &self.plural)
            .field("path", &self.path)
            .field("shape", &self.shape)
            .finish()
    }
}

fn decode_choices<T>(shape: ResponseShape, body: Value) -> Result<Vec<Choice>, ClientError>
where
    T: DeserializeOwned + IntoChoice,
{
    Ok(shape
        .decode_list::<T>(body)?
        .iter()
        .map(IntoChoice::to_choice)
        .collect())
}

/// Definition of one record kind.
pub trait Resource: Send + Sync + 'static {
    /// Server-owned record
    type Entity: Record + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static;

    /// Form state; populated from an entity on edit
    type Draft: Draft + for<'a> From<&'a Self::Entity>;

    /// Capitalized singular, e.g. "College"
    const NOUN: &'static str;

    /// Lower-case plural, e.g. "colleges"
    const PLURAL: &'static str;

    /// REST paths
    const ROUTES: Routes;

    /// Response envelope
    const SHAPE: ResponseShape = ResponseShape::Bare;

    /// Whether the list request depends on the selector, so a selection
    /// change must reload the list.
    const SCOPED: bool = false;

    /// Parent collections, one per selector level, outermost first.
    fn lookups() -> Vec<Lookup> {
        Vec::new()
    }

    /// Selector selections matching `entity`, outermost first.
    fn selection_of(_entity: &Self::Entity) -> Vec<Option<RecordId>> {
        Vec::new()
    }

    /// Copy the selector state into the draft's parent references.
    fn apply_selection(_draft: &mut Self::Draft, _selections: &[Option<RecordId>]) {}

    /// The list request for the current selections.
    fn scope(_selections: &[Option<RecordId>]) -> Scope {
        Scope::All
    }

    /// Checks run after required-field validation, before any request.
    fn check(
        _draft: &Self::Draft,
        _collection: &[Self::Entity],
        _editing: Option<RecordId>,
    ) -> registrar_core::Result<()> {
        Ok(())
    }

    /// Reorders a freshly fetched collection. Server order by default.
    fn sort(_items: &mut [Self::Entity]) {}

    /// Whether `entity` matches a search query. Everything does by default.
    fn matches(_entity: &Self::Entity, _query: &str) -> bool {
        true
    }

    /// Message shown after a successful mutation.
    fn success_message(mutation: Mutation, _draft: &Self::Draft) -> String {
        match mutation {
            Mutation::Create => format!("{} created successfully", Self::NOUN),
            Mutation::Update => format!("{} updated successfully", Self::NOUN),
            Mutation::Delete => format!("{} deleted successfully", Self::NOUN),
        }
    }

    /// Message shown when the server gave no reason.
    fn failure_message(mutation: Mutation) -> String {
        match mutation {
            Mutation::Delete => format!("Failed to delete {}", Self::NOUN.to_lowercase()),
            Mutation::Create | Mutation::Update => OPERATION_FAILED.to_string(),
        }
    }

    /// Message shown when no response was received.
    fn transport_message(mutation: Mutation) -> String {
        Self::failure_message(mutation)
    }

    /// Message shown when the list cannot be fetched.
    fn load_failure() -> String {
        format!("Failed to fetch {}", Self::PLURAL)
    }

    /// Question asked before a delete.
    fn confirm_prompt() -> String {
        format!(
            "Are you sure you want to delete this {}?",
            Self::NOUN.to_lowercase()
        )
    }

    /// The message for a failed mutation: the local or server-supplied
    /// reason when there is one, else the fallback.
    fn error_message(mutation: Mutation, error: &ClientError) -> String {
        if error.is_local() {
            return error.to_string();
        }
        if error.is_transport() {
            return Self::transport_message(mutation);
        }
        error
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| Self::failure_message(mutation))
    }
}
