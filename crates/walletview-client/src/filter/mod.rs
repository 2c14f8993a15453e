//! Wallet statement filtering: predicates, the AND-composed pipeline,
//! date grouping with totals, and the draft/active filter store.

pub mod date;
pub mod pipeline;
pub mod predicate;
pub mod statement;
pub mod store;
pub mod summary;
pub mod types;

pub use pipeline::{apply, apply_refs};
pub use statement::Statement;
pub use store::FilterStore;
pub use summary::{DateGroup, FilteredResult, summarize};
pub use types::{
    Category, CategoryFilter, DateRange, Direction, FilterCriteria, FilterField, FilterUpdate,
    Transaction, TypeFilter,
};
