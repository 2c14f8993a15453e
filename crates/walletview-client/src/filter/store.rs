use crate::filter::types::{FilterCriteria, FilterField, FilterUpdate};

/// Applied filters plus the in-progress edits of a filter sheet.
///
/// Only `active` drives the statement. `draft` reaches `active` through
/// `apply`; `clear_one` and `set_search` write both sides at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStore {
    draft: FilterCriteria,
    active: FilterCriteria,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(active: FilterCriteria) -> Self {
        Self {
            draft: active.clone(),
            active,
        }
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn active(&self) -> &FilterCriteria {
        &self.active
    }

    /// Starts an editing session from the last applied state, dropping any
    /// stale draft edits.
    pub fn open_editor(&mut self) {
        self.draft = self.active.clone();
    }

    pub fn edit(&mut self, update: FilterUpdate) {
        self.draft = self.draft.with(update);
    }

    /// Promotes the draft. Returns whether the active criteria changed.
    pub fn apply(&mut self) -> bool {
        if self.draft == self.active {
            return false;
        }
        self.active = self.draft.clone();
        true
    }

    pub fn reset(&mut self) {
        self.draft = FilterCriteria::default();
        self.active = FilterCriteria::default();
    }

    /// Removes one applied filter (a dismissed chip) without an apply cycle.
    pub fn clear_one(&mut self, field: FilterField) {
        self.active = self.active.cleared(field);
        self.draft = self.draft.cleared(field);
    }

    pub fn set_search(&mut self, query: Option<String>) {
        let update = FilterUpdate::Search(query);
        self.active = self.active.with(update.clone());
        self.draft = self.draft.with(update);
    }
}
