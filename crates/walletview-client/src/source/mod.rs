//! Loading transaction and offer collections from JSON or CSV text.

pub mod input;
pub(crate) mod parse;
pub(crate) mod validate;

use serde_json::Value;

use crate::contracts::types::SourceIssue;
use crate::filter::types::Transaction;
use crate::offers::Offer;
use crate::{ClientError, ClientResult};

pub use input::{ResolvedSource, SourceKind, resolve_source};

const MAX_DISCOUNT_PERCENT: u8 = 100;

/// Parses a JSON array or CSV document into transactions, preserving order.
pub fn load_transactions(content: &str) -> ClientResult<Vec<Transaction>> {
    let rows = parse::parse_rows(content)?;
    validate::validate_rows(rows)
}

/// Parses a JSON array of offer objects. Each entry is checked on its own so
/// one bad offer is reported with its row number.
pub fn load_offers(content: &str) -> ClientResult<Vec<Offer>> {
    let parsed = serde_json::from_str::<Value>(content.trim()).map_err(|error| {
        ClientError::invalid_source_format(&format!("Invalid JSON input: {error}"), "json")
    })?;
    let Value::Array(items) = parsed else {
        return Err(ClientError::invalid_source_format(
            "Offer sources must be a top-level JSON array of offer objects.",
            "json_non_array",
        ));
    };

    let rows_read = items.len();
    let mut offers = Vec::with_capacity(rows_read);
    let mut issues = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let row = (index as i64) + 1;
        match serde_json::from_value::<Offer>(item) {
            Ok(offer) if offer.discount_percent > MAX_DISCOUNT_PERCENT => {
                issues.push(SourceIssue {
                    row,
                    field: "discount_percent".to_string(),
                    code: "invalid_discount_percent".to_string(),
                    description: "discount_percent must be between 0 and 100.".to_string(),
                    expected: Some("0..=100".to_string()),
                    received: Some(offer.discount_percent.to_string()),
                });
            }
            Ok(offer) => offers.push(offer),
            Err(error) => issues.push(SourceIssue {
                row,
                field: "offer".to_string(),
                code: "invalid_offer".to_string(),
                description: error.to_string(),
                expected: None,
                received: None,
            }),
        }
    }

    if !issues.is_empty() {
        return Err(ClientError::invalid_source("offer", rows_read, issues));
    }
    Ok(offers)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{load_offers, load_transactions};
    use crate::filter::types::{Category, Direction};

    #[test]
    fn csv_and_json_sources_load_the_same_rows() {
        let csv = "id,direction,amount,timestamp,description,category,counterparty\n\
                   1,credit,100,2023-05-18T10:30:00,Added money,deposit,UPI\n\
                   2,debit,45.5,2023-05-17 20:15,Order #123,food,Pizza Palace\n";
        let json = r#"[
            {"id":"1","direction":"credit","amount":100,"timestamp":"2023-05-18T10:30:00","description":"Added money","category":"deposit","counterparty":"UPI"},
            {"id":"2","direction":"debit","amount":"45.5","timestamp":"2023-05-17 20:15","description":"Order #123","category":"food","counterparty":"Pizza Palace"}
        ]"#;

        let from_csv = load_transactions(csv);
        let from_json = load_transactions(json);
        assert!(from_csv.is_ok());
        assert!(from_json.is_ok());
        if let (Ok(left), Ok(right)) = (from_csv, from_json) {
            assert_eq!(left, right);
            assert_eq!(left[1].direction(), Direction::Debit);
            assert_eq!(left[1].amount(), Decimal::new(455, 1));
            assert_eq!(left[1].category(), Category::Food);
            assert_eq!(left[1].counterparty(), Some("Pizza Palace"));
        }
    }

    #[test]
    fn offers_report_the_failing_row() {
        let result = load_offers(
            r#"[{"code":"A","title":"A","discount_percent":10},{"code":"B","discount_percent":10}]"#,
        );
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_offer_source");
            let row = error.data.as_ref().map(|data| data["issues"][0]["row"].clone());
            assert_eq!(row, Some(serde_json::json!(2)));
        }
    }

    #[test]
    fn offers_over_one_hundred_percent_are_rejected() {
        let result = load_offers(
            r#"[{"code":"FREE","title":"Free","discount_percent":100},{"code":"X","title":"t","discount_percent":250}]"#,
        );
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_offer_source");
            let data = error.data.unwrap_or_default();
            assert_eq!(data["rows_invalid"], 1);
            assert_eq!(data["issues"][0]["row"], 2);
            assert_eq!(data["issues"][0]["field"], "discount_percent");
            assert_eq!(data["issues"][0]["code"], "invalid_discount_percent");
            assert_eq!(data["issues"][0]["received"], "250");
        }
    }
}
