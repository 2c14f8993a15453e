use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::filter::date::format_date_label;
use crate::filter::types::{Direction, Transaction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub date_label: String,
    pub transactions: Vec<Transaction>,
}

/// Display-ready view of a filtered statement. Rebuilt on every change,
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilteredResult {
    pub groups: Vec<DateGroup>,
    pub total_credit: Decimal,
    pub total_debit: Decimal,
}

impl FilteredResult {
    pub fn net(&self) -> Decimal {
        self.total_credit - self.total_debit
    }

    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(|group| group.transactions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|group| group.transactions.iter().map(Transaction::id))
            .collect()
    }
}

/// Groups `filtered` by calendar day in first-seen order and totals both
/// directions in the same pass.
pub fn summarize<'a, I>(filtered: I) -> FilteredResult
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut result = FilteredResult::default();
    let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for txn in filtered {
        match txn.direction() {
            Direction::Credit => result.total_credit += txn.amount(),
            Direction::Debit => result.total_debit += txn.amount(),
        }

        let date = txn.date();
        let slot = *index_by_date.entry(date).or_insert_with(|| {
            result.groups.push(DateGroup {
                date,
                date_label: format_date_label(date),
                transactions: Vec::new(),
            });
            result.groups.len() - 1
        });
        if let Some(group) = result.groups.get_mut(slot) {
            group.transactions.push(txn.clone());
        }
    }

    log::debug!(
        "summarized {} transactions into {} date groups",
        result.transaction_count(),
        result.groups.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::summarize;
    use crate::filter::types::{Direction, Transaction};

    fn txn(id: &str, direction: Direction, cents: i64, day: u32) -> Transaction {
        let timestamp = NaiveDate::from_ymd_opt(2023, 5, day)
            .and_then(|date| date.and_hms_opt(10, 0, 0))
            .unwrap_or_default();
        let built = Transaction::new(id, direction, Decimal::new(cents, 2), timestamp, id);
        match built {
            Ok(value) => value,
            Err(error) => panic!("fixture transaction failed: {error}"),
        }
    }

    #[test]
    fn groups_keep_first_seen_order_even_when_days_repeat_later() {
        let rows = vec![
            txn("a", Direction::Credit, 1000, 18),
            txn("b", Direction::Debit, 250, 15),
            txn("c", Direction::Debit, 100, 18),
        ];

        let result = summarize(&rows);
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.groups[0].date_label, "18 May 2023");
        assert_eq!(result.ids(), vec!["a", "c", "b"]);
        assert_eq!(result.total_credit, Decimal::new(1000, 2));
        assert_eq!(result.total_debit, Decimal::new(350, 2));
        assert_eq!(result.net(), Decimal::new(650, 2));
    }

    #[test]
    fn empty_input_is_an_empty_result() {
        let result = summarize(&Vec::<Transaction>::new());
        assert!(result.is_empty());
        assert_eq!(result.transaction_count(), 0);
        assert_eq!(result.total_credit, Decimal::ZERO);
        assert_eq!(result.total_debit, Decimal::ZERO);
    }
}
