use chrono::NaiveDateTime;

use crate::filter::predicate::{
    Predicate, amount_range_predicate, category_predicate, date_range_predicate, search_predicate,
    type_predicate,
};
use crate::filter::types::{FilterCriteria, Transaction};

/// One predicate per criteria field. Every predicate must hold for a
/// transaction to be kept; no field short-circuits another.
pub fn build_predicates(criteria: &FilterCriteria, now: NaiveDateTime) -> Vec<Predicate> {
    vec![
        type_predicate(criteria.direction),
        category_predicate(criteria.category),
        date_range_predicate(&criteria.date_range, now),
        amount_range_predicate(criteria.min_amount.as_deref(), criteria.max_amount.as_deref()),
        search_predicate(criteria.search.as_deref()),
    ]
}

/// Filters `transactions` by `criteria`, keeping input order.
pub fn apply(
    transactions: &[Transaction],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> Vec<Transaction> {
    apply_refs(transactions, criteria, now)
        .into_iter()
        .cloned()
        .collect()
}

pub fn apply_refs<'a>(
    transactions: &'a [Transaction],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> Vec<&'a Transaction> {
    let predicates = build_predicates(criteria, now);
    let kept = transactions
        .iter()
        .filter(|&txn| predicates.iter().all(|predicate| predicate(txn)))
        .collect::<Vec<&Transaction>>();

    log::debug!(
        "filter pipeline kept {} of {} transactions (active fields: {})",
        kept.len(),
        transactions.len(),
        criteria.active_fields().len()
    );
    kept
}
