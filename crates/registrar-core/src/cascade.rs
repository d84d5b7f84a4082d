//! Dependent dropdown selection.
//!
//! A [`CascadingSelector`] holds a chain of levels (e.g. College → Program).
//! Level 0 offers all of its options; every deeper level offers only the
//! options whose parent is the selection one level up. Whenever a
//! selection or an option list changes, each level below it is reconciled
//! before the call returns: a selection that is no longer offered falls
//! back to the first offered option, or to none.
//!
//! # Usage
//!
//! ```rust
//! use registrar_core::{CascadingSelector, Choice, RecordId};
//!
//! let mut selector = CascadingSelector::new(2);
//! selector.set_options(0, vec![Choice::root(RecordId::new(1), "Computing")]);
//! selector.set_options(1, vec![Choice::child(RecordId::new(10), RecordId::new(1), "CS")]);
//!
//! assert_eq!(selector.selected(0), Some(RecordId::new(1)));
//! assert_eq!(selector.selected(1), Some(RecordId::new(10)));
//! ```

use crate::ids::RecordId;
use crate::model::{College, Program, Section};

/// One dropdown option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value submitted when chosen
    pub id: RecordId,
    /// Parent record, `None` for top-level records
    pub parent: Option<RecordId>,
    /// Text shown in the dropdown
    pub label: String,
}

impl Choice {
    /// A top-level option.
    pub fn root(id: RecordId, label: impl Into<String>) -> Self {
        Self {
            id,
            parent: None,
            label: label.into(),
        }
    }

    /// An option owned by `parent`.
    pub fn child(id: RecordId, parent: RecordId, label: impl Into<String>) -> Self {
        Self {
            id,
            parent: Some(parent),
            label: label.into(),
        }
    }
}

/// Records that can populate a dropdown.
pub trait IntoChoice {
    /// The dropdown option for this record.
    fn to_choice(&self) -> Choice;
}

impl IntoChoice for College {
    fn to_choice(&self) -> Choice {
        Choice::root(self.id, &self.name)
    }
}

impl IntoChoice for Program {
    fn to_choice(&self) -> Choice {
        Choice::child(self.id, self.college_id, &self.name)
    }
}

impl IntoChoice for Section {
    fn to_choice(&self) -> Choice {
        Choice::child(self.id, self.program_id, &self.section_code)
    }
}

/// Options whose parent is `parent`.
///
/// `parent` is `None` at level 0, where every option is offered.
pub fn visible<'a>(
    options: &'a [Choice],
    parent: Option<Option<RecordId>>,
) -> impl Iterator<Item = &'a Choice> + 'a {
    options.iter().filter(move |choice| match parent {
        None => true,
        Some(selected) => selected.is_some() && choice.parent == selected,
    })
}

/// The selection to keep after a change: `current` if it is still offered,
/// else the first offered option, else none.
pub fn reconcile(
    options: &[Choice],
    parent: Option<Option<RecordId>>,
    current: Option<RecordId>,
) -> Option<RecordId> {
    let mut offered = visible(options, parent).peekable();
    let first = offered.peek().map(|choice| choice.id);
    if current.is_some_and(|id| offered.any(|choice| choice.id == id)) {
        current
    } else {
        first
    }
}

#[derive(Debug, Clone, Default)]
struct Level {
    options: Vec<Choice>,
    selected: Option<RecordId>,
}

/// A chain of dependent dropdowns.
#[derive(Debug, Clone, Default)]
pub struct CascadingSelector {
    levels: Vec<Level>,
}

impl CascadingSelector {
    /// Create a selector with `depth` empty levels.
    pub fn new(depth: usize) -> Self {
        Self {
            levels: vec![Level::default(); depth],
        }
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Replace the option list of `level` and reconcile it and every
    /// level below it.
    pub fn set_options(&mut self, level: usize, options: Vec<Choice>) {
        if let Some(slot) = self.levels.get_mut(level) {
            slot.options = options;
            self.reconcile_from(level);
        }
    }

    /// Select `id` at `level` and reconcile the levels below.
    ///
    /// Returns `false`, leaving the selector unchanged, if `id` is not
    /// currently offered at that level.
    pub fn select(&mut self, level: usize, id: RecordId) -> bool {
        let parent = self.parent_selection(level);
        let Some(slot) = self.levels.get(level) else {
            return false;
        };
        if !visible(&slot.options, parent).any(|choice| choice.id == id) {
            return false;
        }
        if let Some(slot) = self.levels.get_mut(level) {
            slot.selected = Some(id);
        }
        self.reconcile_from(level + 1);
        true
    }

    /// Put back previously captured selections (e.g. those of a record
    /// being edited), keeping each one only if it is still offered.
    ///
    /// A missing ancestor is filled in from the parent of the selection
    /// below it, so a record that only knows its direct parent still lands
    /// on the right branch.
    pub fn restore(&mut self, selections: &[Option<RecordId>]) {
        for (slot, selected) in self.levels.iter_mut().zip(selections) {
            slot.selected = *selected;
        }
        for level in (1..self.levels.len()).rev() {
            if self.levels[level - 1].selected.is_some() {
                continue;
            }
            let inferred = self.levels[level].selected.and_then(|id| {
                self.levels[level]
                    .options
                    .iter()
                    .find(|choice| choice.id == id)
                    .and_then(|choice| choice.parent)
            });
            self.levels[level - 1].selected = inferred;
        }
        self.reconcile_from(0);
    }

    /// Drop every selection and fall back to the first offered options.
    pub fn reset(&mut self) {
        for slot in &mut self.levels {
            slot.selected = None;
        }
        self.reconcile_from(0);
    }

    /// Current selection at `level`.
    pub fn selected(&self, level: usize) -> Option<RecordId> {
        self.levels.get(level).and_then(|slot| slot.selected)
    }

    /// Current selection at every level, top first.
    pub fn selections(&self) -> Vec<Option<RecordId>> {
        self.levels.iter().map(|slot| slot.selected).collect()
    }

    /// Options currently offered at `level`.
    pub fn options(&self, level: usize) -> Vec<&Choice> {
        match self.levels.get(level) {
            Some(slot) => visible(&slot.options, self.parent_selection(level)).collect(),
            None => Vec::new(),
        }
    }

    /// `None` at level 0, otherwise the selection one level up.
    fn parent_selection(&self, level: usize) -> Option<Option<RecordId>> {
        match level {
            0 => None,
            _ => Some(self.selected(level - 1)),
        }
    }

    fn reconcile_from(&mut self, start: usize) {
        for level in start..self.levels.len() {
            let parent = self.parent_selection(level);
            let slot = &mut self.levels[level];
            slot.selected = reconcile(&slot.options, parent, slot.selected);
        }
    }
}
