use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "credit" | "in" => Some(Self::Credit),
            "debit" | "out" => Some(Self::Debit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Deposit,
    Food,
    Reward,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Deposit, Self::Food, Self::Reward, Self::Other];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Food => "food",
            Self::Reward => "reward",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
    }
}

/// A wallet ledger entry. Immutable once built; the filter module only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: String,
    direction: Direction,
    amount: Decimal,
    timestamp: NaiveDateTime,
    description: String,
    category: Category,
    counterparty: Option<String>,
}

impl Transaction {
    /// Builds a transaction with category `Other` and no counterparty.
    ///
    /// Fails when `id` is blank or `amount` is negative; the sign of money
    /// movement lives in `direction`, never in `amount`.
    pub fn new(
        id: &str,
        direction: Direction,
        amount: Decimal,
        timestamp: NaiveDateTime,
        description: &str,
    ) -> ClientResult<Self> {
        if id.trim().is_empty() {
            return Err(ClientError::invalid_transaction(
                id,
                "Transaction id must be present and non-empty.",
            ));
        }
        if amount < Decimal::ZERO {
            return Err(ClientError::invalid_transaction(
                id,
                &format!("Transaction amount must be zero or positive, got {amount}."),
            ));
        }

        Ok(Self {
            id: id.trim().to_string(),
            direction,
            amount,
            timestamp,
            description: description.trim().to_string(),
            category: Category::Other,
            counterparty: None,
        })
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_counterparty(mut self, counterparty: Option<&str>) -> Self {
        self.counterparty = counterparty
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }

    /// Amount with the direction's sign applied: credits positive, debits negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Credit => self.amount,
            Direction::Debit => -self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    All,
    Credit,
    Debit,
}

impl TypeFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Direction::parse(value).map(Self::from)
    }

    pub fn matches(self, direction: Direction) -> bool {
        match self {
            Self::All => true,
            Self::Credit => direction == Direction::Credit,
            Self::Debit => direction == Direction::Debit,
        }
    }
}

impl From<Direction> for TypeFilter {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Credit => Self::Credit,
            Direction::Debit => Self::Debit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::parse(value).map(Self::Only)
    }
}

/// Relative or explicit window over transaction timestamps.
///
/// `Custom` bounds are calendar dates; either side may be left open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    All,
    ThisMonth,
    LastMonth,
    Last3Months,
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl DateRange {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ThisMonth => "this_month",
            Self::LastMonth => "last_month",
            Self::Last3Months => "last_3_months",
            Self::Custom { .. } => "custom",
        }
    }

    /// Parses a range name. `custom` yields an open custom range whose
    /// bounds are filled in separately.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all" => Some(Self::All),
            "this_month" => Some(Self::ThisMonth),
            "last_month" => Some(Self::LastMonth),
            "last_3_months" => Some(Self::Last3Months),
            "custom" => Some(Self::Custom {
                start: None,
                end: None,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Type,
    Category,
    DateRange,
    MinAmount,
    MaxAmount,
    Search,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        Self::Type,
        Self::Category,
        Self::DateRange,
        Self::MinAmount,
        Self::MaxAmount,
        Self::Search,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Category => "category",
            Self::DateRange => "date_range",
            Self::MinAmount => "min_amount",
            Self::MaxAmount => "max_amount",
            Self::Search => "search",
        }
    }
}

/// A single-field edit to a `FilterCriteria`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Type(TypeFilter),
    Category(CategoryFilter),
    DateRange(DateRange),
    MinAmount(Option<String>),
    MaxAmount(Option<String>),
    Search(Option<String>),
}

impl FilterUpdate {
    pub fn field(&self) -> FilterField {
        match self {
            Self::Type(_) => FilterField::Type,
            Self::Category(_) => FilterField::Category,
            Self::DateRange(_) => FilterField::DateRange,
            Self::MinAmount(_) => FilterField::MinAmount,
            Self::MaxAmount(_) => FilterField::MaxAmount,
            Self::Search(_) => FilterField::Search,
        }
    }
}

/// Filter settings for one statement view.
///
/// Amount bounds keep the text exactly as typed and are parsed when the
/// predicates are built, so a half-typed value never blocks an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub direction: TypeFilter,
    pub category: CategoryFilter,
    pub date_range: DateRange,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        self.active_fields().is_empty()
    }

    pub fn is_field_default(&self, field: FilterField) -> bool {
        match field {
            FilterField::Type => self.direction == TypeFilter::All,
            FilterField::Category => self.category == CategoryFilter::All,
            FilterField::DateRange => self.date_range == DateRange::All,
            FilterField::MinAmount => self.min_amount.is_none(),
            FilterField::MaxAmount => self.max_amount.is_none(),
            FilterField::Search => self.search.is_none(),
        }
    }

    /// Fields that differ from the default, in display order.
    pub fn active_fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|field| !self.is_field_default(*field))
            .collect()
    }

    /// Returns a copy with one field replaced. Blank text inputs become `None`.
    pub fn with(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Type(value) => next.direction = value,
            FilterUpdate::Category(value) => next.category = value,
            FilterUpdate::DateRange(value) => next.date_range = value,
            FilterUpdate::MinAmount(value) => next.min_amount = normalize_text_input(value),
            FilterUpdate::MaxAmount(value) => next.max_amount = normalize_text_input(value),
            FilterUpdate::Search(value) => next.search = normalize_text_input(value),
        }
        next
    }

    /// Returns a copy with one field back at its default.
    pub fn cleared(&self, field: FilterField) -> Self {
        let mut next = self.clone();
        match field {
            FilterField::Type => next.direction = TypeFilter::All,
            FilterField::Category => next.category = CategoryFilter::All,
            FilterField::DateRange => next.date_range = DateRange::All,
            FilterField::MinAmount => next.min_amount = None,
            FilterField::MaxAmount => next.max_amount = None,
            FilterField::Search => next.search = None,
        }
        next
    }
}

fn normalize_text_input(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
