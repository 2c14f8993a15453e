use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::filter::date::window_for;
use crate::filter::types::{CategoryFilter, DateRange, Transaction, TypeFilter};

pub type Predicate = Box<dyn Fn(&Transaction) -> bool>;

const CURRENCY_PREFIXES: [char; 4] = ['$', '₹', '€', '£'];

pub fn type_predicate(filter: TypeFilter) -> Predicate {
    Box::new(move |txn: &Transaction| filter.matches(txn.direction()))
}

pub fn category_predicate(filter: CategoryFilter) -> Predicate {
    match filter {
        CategoryFilter::All => Box::new(|_: &Transaction| true),
        CategoryFilter::Only(category) => {
            Box::new(move |txn: &Transaction| txn.category() == category)
        }
    }
}

pub fn date_range_predicate(range: &DateRange, now: NaiveDateTime) -> Predicate {
    match window_for(range, now) {
        Some(window) => Box::new(move |txn: &Transaction| window.contains(txn.timestamp())),
        None => Box::new(|_: &Transaction| true),
    }
}

/// Inclusive amount bounds from raw user text. A bound that does not parse
/// imposes no constraint.
pub fn amount_range_predicate(min: Option<&str>, max: Option<&str>) -> Predicate {
    let lower = min.and_then(|value| lenient_bound("min", value));
    let upper = max.and_then(|value| lenient_bound("max", value));

    Box::new(move |txn: &Transaction| {
        let amount = txn.amount();
        lower.is_none_or(|bound| amount >= bound) && upper.is_none_or(|bound| amount <= bound)
    })
}

pub fn search_predicate(query: Option<&str>) -> Predicate {
    let needle = query
        .map(|value| value.trim().to_lowercase())
        .unwrap_or_default();
    if needle.is_empty() {
        return Box::new(|_: &Transaction| true);
    }

    Box::new(move |txn: &Transaction| {
        contains_lowercase(txn.description(), &needle)
            || txn
                .counterparty()
                .is_some_and(|value| contains_lowercase(value, &needle))
    })
}

/// Case-insensitive substring test across `fields`. A blank query matches.
pub fn matches_query<'a, I>(fields: I, query: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| contains_lowercase(field, &needle))
}

/// Parses an amount typed into a filter form: surrounding whitespace, one
/// leading currency symbol and `,` group separators are tolerated.
pub fn parse_amount_bound(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    let without_symbol = trimmed
        .strip_prefix(CURRENCY_PREFIXES)
        .unwrap_or(trimmed)
        .trim_start();
    let cleaned = without_symbol.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

fn lenient_bound(label: &str, value: &str) -> Option<Decimal> {
    let parsed = parse_amount_bound(value);
    if parsed.is_none() && !value.trim().is_empty() {
        log::warn!("ignoring unparseable {label} amount bound `{value}`");
    }
    parsed
}

fn contains_lowercase(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{matches_query, parse_amount_bound};

    #[test]
    fn amount_bounds_tolerate_symbols_and_separators() {
        assert_eq!(parse_amount_bound(" 50 "), Some(Decimal::new(50, 0)));
        assert_eq!(parse_amount_bound("₹1,250.50"), Some(Decimal::new(125050, 2)));
        assert_eq!(parse_amount_bound("$ 45.5"), Some(Decimal::new(455, 1)));
    }

    #[test]
    fn malformed_amount_bounds_are_unbounded() {
        assert_eq!(parse_amount_bound("fifty"), None);
        assert_eq!(parse_amount_bound("12.3.4"), None);
        assert_eq!(parse_amount_bound(""), None);
        assert_eq!(parse_amount_bound("$"), None);
    }

    #[test]
    fn query_matching_is_case_insensitive_and_blank_matches() {
        assert!(matches_query(["Pizza Palace"], "PIZZA"));
        assert!(matches_query(["Wallet top-up", "UPI"], "upi"));
        assert!(!matches_query(["Burger Barn"], "pizza"));
        assert!(matches_query(Vec::<&str>::new(), "   "));
    }
}
