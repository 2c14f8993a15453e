pub mod commands;
pub mod contracts;
pub mod error;
pub mod filter;
pub mod offers;
pub mod sample;
pub mod source;

pub use contracts::envelope::{CommandOutput, FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use filter::{
    Category, CategoryFilter, DateGroup, DateRange, Direction, FilterCriteria, FilterField,
    FilterStore, FilterUpdate, FilteredResult, Statement, Transaction, TypeFilter,
};
pub use offers::{Offer, OfferSort};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
