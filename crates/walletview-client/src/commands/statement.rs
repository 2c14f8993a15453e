use chrono::NaiveDateTime;

use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{
    AppliedFilters, StatementData, StatementGroup, StatementSummary, TransactionRow,
};
use crate::filter::date::{format_iso_date, format_timestamp, parse_iso_date};
use crate::filter::types::{
    CategoryFilter, DateRange, FilterCriteria, FilterUpdate, Transaction, TypeFilter,
};
use crate::filter::{FilterStore, Statement};
use crate::source::{ResolvedSource, load_transactions, resolve_source};
use crate::{ClientError, ClientResult};

const COMMAND: &str = "statement";

/// Filter flags exactly as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct StatementFilterArgs {
    pub transaction_type: Option<String>,
    pub category: Option<String>,
    pub range: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatementRunOptions {
    pub path: String,
    pub filters: StatementFilterArgs,
    pub now: NaiveDateTime,
    pub stdin_override: Option<String>,
}

pub fn run_with_options(options: StatementRunOptions) -> ClientResult<SuccessEnvelope> {
    let criteria = build_criteria(&options.filters)?;
    let source = resolve_source(&options.path, options.stdin_override)?;
    run_with_source(&source, criteria, options.now)
}

pub(crate) fn run_with_source(
    source: &ResolvedSource,
    criteria: FilterCriteria,
    now: NaiveDateTime,
) -> ClientResult<SuccessEnvelope> {
    let transactions = load_transactions(&source.content)?;
    let rows_read = transactions.len();
    let statement = Statement::with_filters(transactions, FilterStore::with_active(criteria), now);

    let data = StatementData {
        source: source.describe(),
        now: format_timestamp(&now),
        rows_read,
        filters: applied_filters(statement.active()),
        active_filters: statement
            .active()
            .active_fields()
            .into_iter()
            .map(|field| field.as_str().to_string())
            .collect(),
        summary: StatementSummary {
            total_credit: statement.result().total_credit,
            total_debit: statement.result().total_debit,
            net: statement.result().net(),
            transaction_count: statement.result().transaction_count(),
            group_count: statement.result().groups.len(),
        },
        groups: statement
            .result()
            .groups
            .iter()
            .map(|group| StatementGroup {
                date: format_iso_date(&group.date),
                date_label: group.date_label.clone(),
                transactions: group.transactions.iter().map(transaction_row).collect(),
            })
            .collect(),
    };

    Ok(SuccessEnvelope::from(data))
}

/// Validates enum and date flags strictly. Amount bounds pass through as
/// text; the filter treats an unparseable bound as absent.
pub fn build_criteria(args: &StatementFilterArgs) -> ClientResult<FilterCriteria> {
    let mut criteria = FilterCriteria::default();

    if let Some(value) = args.transaction_type.as_deref() {
        let parsed = TypeFilter::parse(value)
            .ok_or_else(|| invalid_flag("`--type` must be one of: all, credit, debit."))?;
        criteria = criteria.with(FilterUpdate::Type(parsed));
    }

    if let Some(value) = args.category.as_deref() {
        let parsed = CategoryFilter::parse(value).ok_or_else(|| {
            invalid_flag("`--category` must be one of: all, deposit, food, reward, other.")
        })?;
        criteria = criteria.with(FilterUpdate::Category(parsed));
    }

    let range = match args.range.as_deref() {
        Some(value) => Some(DateRange::parse(value).ok_or_else(|| {
            invalid_flag(
                "`--range` must be one of: all, this-month, last-month, last-3-months, custom.",
            )
        })?),
        None => None,
    };
    let start = parse_date_flag("from", args.from.as_deref())?;
    let end = parse_date_flag("to", args.to.as_deref())?;

    if start.is_some() || end.is_some() {
        if let Some(other) = range {
            if !matches!(other, DateRange::Custom { .. }) {
                return Err(invalid_flag(
                    "`--from`/`--to` only apply to `--range custom`.",
                ));
            }
        }
        if let (Some(first), Some(last)) = (start, end) {
            if first > last {
                return Err(invalid_flag(
                    "Invalid date range: `--from` must be on or before `--to`.",
                ));
            }
        }
        criteria = criteria.with(FilterUpdate::DateRange(DateRange::Custom { start, end }));
    } else if let Some(value) = range {
        criteria = criteria.with(FilterUpdate::DateRange(value));
    }

    criteria = criteria
        .with(FilterUpdate::MinAmount(args.min_amount.clone()))
        .with(FilterUpdate::MaxAmount(args.max_amount.clone()))
        .with(FilterUpdate::Search(args.search.clone()));

    Ok(criteria)
}

fn parse_date_flag(flag: &str, value: Option<&str>) -> ClientResult<Option<chrono::NaiveDate>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    parse_iso_date(raw).map(Some).ok_or_else(|| {
        invalid_flag(&format!(
            "`--{flag}` must use YYYY-MM-DD format with a real calendar date."
        ))
    })
}

fn invalid_flag(message: &str) -> ClientError {
    ClientError::invalid_argument_for_command(message, Some(COMMAND))
}

fn applied_filters(criteria: &FilterCriteria) -> AppliedFilters {
    let (from, to) = match criteria.date_range {
        DateRange::Custom { start, end } => (
            start.as_ref().map(format_iso_date),
            end.as_ref().map(format_iso_date),
        ),
        _ => (None, None),
    };
    AppliedFilters {
        transaction_type: criteria.direction.as_str().to_string(),
        category: criteria.category.as_str().to_string(),
        date_range: criteria.date_range.as_str().to_string(),
        from,
        to,
        min_amount: criteria.min_amount.clone(),
        max_amount: criteria.max_amount.clone(),
        search: criteria.search.clone(),
    }
}

fn transaction_row(txn: &Transaction) -> TransactionRow {
    TransactionRow {
        id: txn.id().to_string(),
        direction: txn.direction().as_str().to_string(),
        amount: txn.amount(),
        signed_amount: txn.signed_amount(),
        timestamp: format_timestamp(&txn.timestamp()),
        description: txn.description().to_string(),
        category: txn.category().as_str().to_string(),
        counterparty: txn.counterparty().map(str::to_string),
    }
}
