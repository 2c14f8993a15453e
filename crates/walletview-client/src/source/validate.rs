use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::contracts::types::SourceIssue;
use crate::filter::date::parse_timestamp;
use crate::filter::types::{Category, Direction, Transaction};
use crate::source::parse::ParsedRow;
use crate::{ClientError, ClientResult};

/// Turns parsed rows into transactions, in source order. Any issue on any
/// row fails the whole source with every issue listed.
pub(crate) fn validate_rows(parsed_rows: Vec<ParsedRow>) -> ClientResult<Vec<Transaction>> {
    let rows_read = parsed_rows.len();
    let mut transactions = Vec::with_capacity(rows_read);
    let mut issues = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for raw in parsed_rows {
        let mut row_issues = Vec::new();

        let id = validate_required_string(raw.row, "id", raw.id, &mut row_issues);
        if let Some(value) = id.as_ref() {
            if !seen_ids.insert(value.clone()) {
                row_issues.push(issue(
                    raw.row,
                    "id",
                    "duplicate_id",
                    "id must be unique within the source.",
                    None,
                    Some(value.clone()),
                ));
            }
        }
        let direction = validate_direction(raw.row, raw.direction, &mut row_issues);
        let amount = validate_amount(raw.row, raw.amount, &mut row_issues);
        let timestamp = validate_timestamp(raw.row, raw.timestamp, &mut row_issues);
        let description =
            validate_required_string(raw.row, "description", raw.description, &mut row_issues);
        let category = validate_category(raw.row, raw.category, &mut row_issues);

        if !row_issues.is_empty() {
            issues.extend(row_issues);
            continue;
        }

        if let (Some(id), Some(direction), Some(amount), Some(timestamp), Some(description)) =
            (id, direction, amount, timestamp, description)
        {
            let built = Transaction::new(&id, direction, amount, timestamp, &description)?
                .with_category(category)
                .with_counterparty(raw.counterparty.as_deref());
            transactions.push(built);
        }
    }

    if !issues.is_empty() {
        return Err(ClientError::invalid_source("transaction", rows_read, issues));
    }

    log::debug!("loaded {} transactions from source", transactions.len());
    Ok(transactions)
}

fn validate_required_string(
    row: i64,
    field: &str,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<String> {
    let trimmed = value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    if trimmed.is_none() {
        issues.push(issue(
            row,
            field,
            "missing_required_field",
            &format!("{field} must be present and non-empty."),
            None,
            None,
        ));
    }
    trimmed
}

fn validate_direction(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<Direction> {
    let raw = validate_required_string(row, "direction", value, issues)?;
    let parsed = Direction::parse(&raw);
    if parsed.is_none() {
        issues.push(issue(
            row,
            "direction",
            "invalid_direction",
            "direction must be credit or debit.",
            Some("credit|debit"),
            Some(raw),
        ));
    }
    parsed
}

fn validate_amount(row: i64, value: Option<String>, issues: &mut Vec<SourceIssue>) -> Option<Decimal> {
    let raw = validate_required_string(row, "amount", value, issues)?;
    let Ok(parsed) = Decimal::from_str(&raw) else {
        issues.push(issue(
            row,
            "amount",
            "invalid_amount",
            "amount must be a plain decimal number.",
            Some("number"),
            Some(raw),
        ));
        return None;
    };
    if parsed < Decimal::ZERO {
        issues.push(issue(
            row,
            "amount",
            "negative_amount",
            "amount must be zero or positive; use direction for money out.",
            Some(">= 0"),
            Some(raw),
        ));
        return None;
    }
    Some(parsed)
}

fn validate_timestamp(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<SourceIssue>,
) -> Option<chrono::NaiveDateTime> {
    let raw = validate_required_string(row, "timestamp", value, issues)?;
    let parsed = parse_timestamp(&raw);
    if parsed.is_none() {
        issues.push(issue(
            row,
            "timestamp",
            "invalid_timestamp",
            "timestamp must be YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS] with real calendar values.",
            Some("YYYY-MM-DD[THH:MM[:SS]]"),
            Some(raw),
        ));
    }
    parsed
}

fn validate_category(row: i64, value: Option<String>, issues: &mut Vec<SourceIssue>) -> Category {
    let Some(raw) = value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
    else {
        return Category::Other;
    };
    match Category::parse(&raw) {
        Some(category) => category,
        None => {
            issues.push(issue(
                row,
                "category",
                "invalid_category",
                "category must be one of deposit, food, reward, other.",
                Some("deposit|food|reward|other"),
                Some(raw),
            ));
            Category::Other
        }
    }
}

fn issue(
    row: i64,
    field: &str,
    code: &str,
    description: &str,
    expected: Option<&str>,
    received: Option<String>,
) -> SourceIssue {
    SourceIssue {
        row,
        field: field.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        expected: expected.map(str::to_string),
        received,
    }
}

#[cfg(test)]
mod tests {
    use super::validate_rows;
    use crate::source::parse::ParsedRow;

    fn row(index: i64, id: &str, amount: &str) -> ParsedRow {
        ParsedRow {
            row: index,
            id: Some(id.to_string()),
            direction: Some("credit".to_string()),
            amount: Some(amount.to_string()),
            timestamp: Some("2023-05-18".to_string()),
            description: Some("Wallet top-up".to_string()),
            ..ParsedRow::default()
        }
    }

    #[test]
    fn all_row_issues_are_reported_together() {
        let result = validate_rows(vec![row(1, "a", "-5"), row(2, "a", "abc"), row(3, "b", "1")]);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_transaction_source");
            let issues = error
                .data
                .as_ref()
                .and_then(|data| data["issues"].as_array().cloned())
                .unwrap_or_default();
            let codes = issues
                .iter()
                .filter_map(|issue| issue["code"].as_str().map(str::to_string))
                .collect::<Vec<String>>();
            assert_eq!(codes, vec!["negative_amount", "duplicate_id", "invalid_amount"]);
        }
    }

    #[test]
    fn missing_category_defaults_to_other() {
        let result = validate_rows(vec![row(1, "a", "10.00")]);
        assert!(result.is_ok());
        if let Ok(rows) = result {
            assert_eq!(rows[0].category(), crate::filter::Category::Other);
        }
    }
}
