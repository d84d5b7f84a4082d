//! The generic registry view.
//!
//! One [`RegistryView`] backs each dashboard tab: it owns the cached
//! collection, the create/edit form, the cascading parent selector, and
//! the error/success messages, and it talks to one REST resource through
//! an [`ApiClient`].
//!
//! Every operation takes `&self`; state sits behind a mutex that is never
//! held across a request. Overlapping list loads are ordered by a request
//! generation: a response is applied only if no newer load was issued
//! after it. Parent lookups carry their own generation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use registrar_client::ApiClient;
use registrar_core::{CascadingSelector, Choice, Draft, FormMode, Record, RecordId};

use crate::confirm::Confirm;
use crate::resource::{Mutation, Resource, Scope};

struct ViewState<R: Resource> {
    collection: Vec<R::Entity>,
    draft: R::Draft,
    editing_id: Option<RecordId>,
    selector: CascadingSelector,
    error_message: Option<String>,
    success_message: Option<String>,
    query: String,
}

impl<R: Resource> ViewState<R> {
    fn new() -> Self {
        Self {
            collection: Vec::new(),
            draft: R::Draft::default(),
            editing_id: None,
            selector: CascadingSelector::new(R::lookups().len()),
            error_message: None,
            success_message: None,
            query: String::new(),
        }
    }

    fn mode(&self) -> FormMode {
        match self.editing_id {
            Some(_) => FormMode::Update,
            None => FormMode::Create,
        }
    }

    fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    fn sync_draft(&mut self) {
        let selections = self.selector.selections();
        R::apply_selection(&mut self.draft, &selections);
    }

    fn reset_form(&mut self) {
        self.editing_id = None;
        self.draft = R::Draft::default();
        self.selector.reset();
        self.sync_draft();
    }
}

/// A point-in-time copy of a view's state, for rendering.
pub struct ViewSnapshot<R: Resource> {
    /// Cached collection, in display order
    pub collection: Vec<R::Entity>,
    /// Records matching the current search query
    pub rows: Vec<R::Entity>,
    /// Form contents
    pub draft: R::Draft,
    /// Record being edited; `None` in create mode
    pub editing_id: Option<RecordId>,
    /// Selector selections, outermost first
    pub selections: Vec<Option<RecordId>>,
    /// Options offered at each selector level
    pub options: Vec<Vec<Choice>>,
    /// Last failure, if any
    pub error_message: Option<String>,
    /// Last success, if any
    pub success_message: Option<String>,
    /// Current search query
    pub query: String,
}

impl<R: Resource> ViewSnapshot<R> {
    /// Create or update, depending on whether a record is pinned.
    pub fn mode(&self) -> FormMode {
        match self.editing_id {
            Some(_) => FormMode::Update,
            None => FormMode::Create,
        }
    }
}

impl<R: Resource> fmt::Debug for ViewSnapshot<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSnapshot")
            .field("resource", &R::PLURAL)
            .field("collection", &self.collection)
            .field("draft", &self.draft)
            .field("editing_id", &self.editing_id)
            .field("selections", &self.selections)
            .field("error_message", &self.error_message)
            .field("success_message", &self.success_message)
            .field("query", &self.query)
            .finish()
    }
}

/// `true` if every requested selection survived. Unrequested levels
/// may hold anything.
fn all_kept(wanted: &[Option<RecordId>], got: &[Option<RecordId>]) -> bool {
    wanted
        .iter()
        .zip(got)
        .all(|(wanted, got)| wanted.is_none() || wanted == got)
}

/// List, form, and messages for one record kind.
pub struct RegistryView<R: Resource> {
    api: Arc<dyn ApiClient>,
    state: Mutex<ViewState<R>>,
    list_generation: AtomicU64,
    lookup_generation: AtomicU64,
}

impl<R: Resource> fmt::Debug for RegistryView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryView")
            .field("resource", &R::PLURAL)
            .field("list_generation", &self.list_generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl<R: Resource> RegistryView<R> {
    /// An empty view in create mode. Nothing is fetched until
    /// [`mount`](Self::mount).
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::new()),
            list_generation: AtomicU64::new(0),
            lookup_generation: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Fetch the parent lookups, then the collection.
    pub async fn mount(&self) {
        self.load_lookups().await;
        self.load().await;
    }

    /// Replace the collection with the server's.
    ///
    /// Returns `true` if this response was applied. On failure the
    /// collection is left as it was and the error message is set; a
    /// response overtaken by a newer load is dropped.
    pub async fn load(&self) -> bool {
        let generation = self.list_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let scope = R::scope(&self.lock().selector.selections());

        let query = match scope {
            Scope::All => Vec::new(),
            Scope::Query(params) => params,
            Scope::Empty => {
                let mut state = self.lock();
                if !self.is_current(&self.list_generation, generation) {
                    return false;
                }
                state.collection.clear();
                return true;
            }
        };

        tracing::debug!(resource = R::PLURAL, generation, "Loading collection");
        let result = self
            .api
            .get(R::ROUTES.list, &query)
            .await
            .and_then(|body| R::SHAPE.decode_list::<R::Entity>(body));

        let mut state = self.lock();
        if !self.is_current(&self.list_generation, generation) {
            tracing::debug!(resource = R::PLURAL, generation, "Discarding stale list response");
            return false;
        }
        match result {
            Ok(mut items) => {
                R::sort(&mut items);
                tracing::debug!(resource = R::PLURAL, count = items.len(), "Collection loaded");
                state.collection = items;
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::PLURAL, error = %e, "Failed to load collection");
                state.error_message = Some(R::load_failure());
                false
            }
        }
    }

    /// Fetch every parent collection and refresh the selector.
    ///
    /// Returns `true` if all lookups were applied. A failed lookup leaves
    /// its level's options as they were.
    pub async fn load_lookups(&self) -> bool {
        let lookups = R::lookups();
        if lookups.is_empty() {
            return true;
        }
        let generation = self.lookup_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut results = Vec::with_capacity(lookups.len());
        for lookup in &lookups {
            let result = self
                .api
                .get(lookup.path, &[])
                .await
                .and_then(|body| lookup.decode(body));
            results.push(result);
        }

        let mut state = self.lock();
        if !self.is_current(&self.lookup_generation, generation) {
            tracing::debug!(resource = R::PLURAL, generation, "Discarding stale lookups");
            return false;
        }
        let mut complete = true;
        for (level, (lookup, result)) in lookups.iter().zip(results).enumerate() {
            match result {
                Ok(choices) => state.selector.set_options(level, choices),
                Err(e) => {
                    tracing::warn!(lookup = lookup.plural, error = %e, "Failed to load lookup");
                    state.error_message = Some(format!("Failed to fetch {}", lookup.plural));
                    complete = false;
                }
            }
        }
        state.sync_draft();
        complete
    }

    fn is_current(&self, counter: &AtomicU64, generation: u64) -> bool {
        counter.load(Ordering::SeqCst) == generation
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Pick an option at one selector level.
    ///
    /// Deeper levels are reconciled immediately. When the list depends on
    /// the selection and it changed, the list is reloaded. Returns `false`
    /// if `id` is not currently offered at `level`.
    pub async fn select(&self, level: usize, id: RecordId) -> bool {
        let changed = {
            let mut state = self.lock();
            let before = state.selector.selections();
            if !state.selector.select(level, id) {
                return false;
            }
            state.sync_draft();
            state.selector.selections() != before
        };
        if changed && R::SCOPED {
            self.load().await;
        }
        true
    }

    /// Set several levels at once, outermost first. Missing ancestors are
    /// inferred from the deepest given selection.
    ///
    /// Returns `true` if every requested selection was kept.
    pub async fn choose(&self, selections: &[Option<RecordId>]) -> bool {
        let (kept, changed) = {
            let mut state = self.lock();
            let before = state.selector.selections();
            state.selector.restore(selections);
            state.sync_draft();
            let after = state.selector.selections();
            (all_kept(selections, &after), after != before)
        };
        if changed && R::SCOPED {
            self.load().await;
        }
        kept
    }

    // ========================================================================
    // Form
    // ========================================================================

    /// Switch to edit mode for `entity`. No request is made.
    ///
    /// Refused, with the error message set and the form left as it was,
    /// when a parent the record points at is not among the loaded
    /// options. Saving would otherwise re-parent the record.
    pub fn begin_edit(&self, entity: &R::Entity) -> bool {
        let mut state = self.lock();
        let wanted = R::selection_of(entity);
        let mut selector = state.selector.clone();
        selector.restore(&wanted);
        if !all_kept(&wanted, &selector.selections()) {
            tracing::warn!(
                resource = R::PLURAL,
                id = %entity.id(),
                ?wanted,
                "Parent not loaded; edit refused"
            );
            state.error_message = Some(format!(
                "Cannot edit this {}: its current assignment is not in the loaded list",
                R::NOUN.to_lowercase()
            ));
            return false;
        }
        state.editing_id = Some(entity.id());
        state.draft = R::Draft::from(entity);
        state.selector = selector;
        state.sync_draft();
        true
    }

    /// Switch to edit mode for the cached record `id`.
    ///
    /// Returns `false` if no such record is cached or the edit is refused.
    pub fn begin_edit_id(&self, id: RecordId) -> bool {
        self.find(id).is_some_and(|entity| self.begin_edit(&entity))
    }

    /// Back to create mode with an empty form. No request is made.
    pub fn cancel(&self) {
        self.lock().reset_form();
    }

    /// Edit the form's free-text fields. Parent references stay driven by
    /// the selector.
    pub fn update_draft(&self, edit: impl FnOnce(&mut R::Draft)) {
        let mut state = self.lock();
        edit(&mut state.draft);
        state.sync_draft();
    }

    /// Validate and send the form.
    ///
    /// Both messages are cleared first. A local validation or uniqueness
    /// failure sets the error message without any request. On success the
    /// form is reset and the list reloaded. Returns `true` on success.
    pub async fn submit(&self) -> bool {
        let (mode, editing, draft) = {
            let mut state = self.lock();
            state.clear_messages();
            let mode = state.mode();
            let checked = state
                .draft
                .validate(mode)
                .and_then(|()| R::check(&state.draft, &state.collection, state.editing_id));
            if let Err(e) = checked {
                tracing::debug!(resource = R::PLURAL, error = %e, "Form rejected locally");
                state.error_message = Some(e.to_string());
                return false;
            }
            (mode, state.editing_id, state.draft.clone())
        };

        let mutation = Mutation::from(mode);
        let payload = draft.payload(mode);
        let result = match editing {
            Some(id) => self.api.put(&R::ROUTES.item(id), &payload).await,
            None => self.api.post(R::ROUTES.create, &payload).await,
        }
        .and_then(|body| R::SHAPE.check_outcome(&body));

        match result {
            Ok(()) => {
                tracing::info!(resource = R::PLURAL, ?mutation, id = ?editing, "Saved");
                {
                    let mut state = self.lock();
                    state.success_message = Some(R::success_message(mutation, &draft));
                    state.reset_form();
                }
                self.load().await;
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::PLURAL, ?mutation, error = %e, "Save failed");
                self.lock().error_message = Some(R::error_message(mutation, &e));
                false
            }
        }
    }

    /// Delete record `id` after asking `confirm`.
    ///
    /// Declining is a no-op. Returns `true` if the record was deleted.
    pub async fn remove(&self, id: RecordId, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(&R::confirm_prompt()) {
            tracing::debug!(resource = R::PLURAL, %id, "Delete declined");
            return false;
        }
        self.lock().clear_messages();

        let result = self
            .api
            .delete(&R::ROUTES.item(id))
            .await
            .and_then(|body| R::SHAPE.check_outcome(&body));

        match result {
            Ok(()) => {
                tracing::info!(resource = R::PLURAL, %id, "Deleted");
                self.lock().success_message =
                    Some(R::success_message(Mutation::Delete, &R::Draft::default()));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::warn!(resource = R::PLURAL, %id, error = %e, "Delete failed");
                self.lock().error_message = Some(R::error_message(Mutation::Delete, &e));
                false
            }
        }
    }

    // ========================================================================
    // Search and accessors
    // ========================================================================

    /// Set the search query. The cached collection is untouched.
    pub fn search(&self, query: &str) {
        self.lock().query = query.to_string();
    }

    /// Cached records matching the search query.
    pub fn rows(&self) -> Vec<R::Entity> {
        let state = self.lock();
        state
            .collection
            .iter()
            .filter(|entity| R::matches(entity, &state.query))
            .cloned()
            .collect()
    }

    /// The cached collection.
    pub fn collection(&self) -> Vec<R::Entity> {
        self.lock().collection.clone()
    }

    /// The cached record `id`.
    pub fn find(&self, id: RecordId) -> Option<R::Entity> {
        self.lock()
            .collection
            .iter()
            .find(|entity| entity.id() == id)
            .cloned()
    }

    /// The form contents.
    pub fn draft(&self) -> R::Draft {
        self.lock().draft.clone()
    }

    /// Record being edited, if any.
    pub fn editing_id(&self) -> Option<RecordId> {
        self.lock().editing_id
    }

    /// Create or update.
    pub fn mode(&self) -> FormMode {
        self.lock().mode()
    }

    /// Selector selections, outermost first.
    pub fn selections(&self) -> Vec<Option<RecordId>> {
        self.lock().selector.selections()
    }

    /// Options currently offered at `level`.
    pub fn options(&self, level: usize) -> Vec<Choice> {
        self.lock()
            .selector
            .options(level)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Last failure message.
    pub fn error_message(&self) -> Option<String> {
        self.lock().error_message.clone()
    }

    /// Last success message.
    pub fn success_message(&self) -> Option<String> {
        self.lock().success_message.clone()
    }

    /// Copy of the whole view state.
    pub fn snapshot(&self) -> ViewSnapshot<R> {
        let state = self.lock();
        let rows = state
            .collection
            .iter()
            .filter(|entity| R::matches(entity, &state.query))
            .cloned()
            .collect();
        ViewSnapshot {
            collection: state.collection.clone(),
            rows,
            draft: state.draft.clone(),
            editing_id: state.editing_id,
            selections: state.selector.selections(),
            options: (0..state.selector.depth())
                .map(|level| state.selector.options(level).into_iter().cloned().collect())
                .collect(),
            error_message: state.error_message.clone(),
            success_message: state.success_message.clone(),
            query: state.query.clone(),
        }
    }
}
