use chrono::NaiveDateTime;

use crate::filter::pipeline::apply_refs;
use crate::filter::store::FilterStore;
use crate::filter::summary::{FilteredResult, summarize};
use crate::filter::types::{FilterCriteria, FilterField, FilterUpdate, Transaction};

/// A wallet statement screen's state: the transaction collection, its
/// filters, the reference clock for relative ranges, and the current result.
///
/// Transitions that can change the applied filters recompute the result
/// before returning; draft edits do not.
#[derive(Debug, Clone)]
pub struct Statement {
    transactions: Vec<Transaction>,
    store: FilterStore,
    now: NaiveDateTime,
    result: FilteredResult,
}

impl Statement {
    pub fn new(transactions: Vec<Transaction>, now: NaiveDateTime) -> Self {
        Self::with_filters(transactions, FilterStore::new(), now)
    }

    pub fn with_filters(
        transactions: Vec<Transaction>,
        store: FilterStore,
        now: NaiveDateTime,
    ) -> Self {
        let mut statement = Self {
            transactions,
            store,
            now,
            result: FilteredResult::default(),
        };
        statement.recompute();
        statement
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filters(&self) -> &FilterStore {
        &self.store
    }

    pub fn active(&self) -> &FilterCriteria {
        self.store.active()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn result(&self) -> &FilteredResult {
        &self.result
    }

    pub fn into_result(self) -> FilteredResult {
        self.result
    }

    pub fn open_editor(&mut self) {
        self.store.open_editor();
    }

    pub fn edit(&mut self, update: FilterUpdate) {
        self.store.edit(update);
    }

    pub fn apply(&mut self) {
        self.store.apply();
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.store.reset();
        self.recompute();
    }

    pub fn clear_one(&mut self, field: FilterField) {
        self.store.clear_one(field);
        self.recompute();
    }

    pub fn set_search(&mut self, query: Option<String>) {
        self.store.set_search(query);
        self.recompute();
    }

    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
        self.recompute();
    }

    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        self.recompute();
    }

    fn recompute(&mut self) {
        let filtered = apply_refs(&self.transactions, self.store.active(), self.now);
        self.result = summarize(filtered);
    }
}
