use std::collections::HashMap;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

use crate::{ClientError, ClientResult};

pub(crate) const REQUIRED_FIELDS: [&str; 5] =
    ["id", "direction", "amount", "timestamp", "description"];
pub(crate) const OPTIONAL_FIELDS: [&str; 2] = ["category", "counterparty"];

#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedRow {
    pub(crate) row: i64,
    pub(crate) id: Option<String>,
    pub(crate) direction: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) timestamp: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) counterparty: Option<String>,
}

pub(crate) fn parse_rows(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_source_format(
            "Transaction source is empty.",
            "empty",
        ));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if !trimmed.starts_with('{') && looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ClientError::invalid_source_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    Err(ClientError::invalid_source_format(
        "Unsupported source format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let parsed = serde_json::from_str::<Value>(content).map_err(|error| {
        ClientError::invalid_source_format(&format!("Invalid JSON input: {error}"), "json")
    })?;

    let Some(items) = parsed.as_array() else {
        return Err(ClientError::invalid_source_format(
            "JSON input must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(ClientError::invalid_source_format(
                "JSON array entries must all be objects with transaction fields.",
                "json_array",
            ));
        };

        rows.push(ParsedRow {
            row: (index as i64) + 1,
            id: read_optional_string(object.get("id")),
            direction: read_optional_string(object.get("direction")),
            amount: read_optional_string(object.get("amount")),
            timestamp: read_optional_string(object.get("timestamp")),
            description: read_optional_string(object.get("description")),
            category: read_optional_string(object.get("category")),
            counterparty: read_optional_string(object.get("counterparty")),
        });
    }

    Ok(rows)
}

fn parse_csv(content: &str) -> ClientResult<Vec<ParsedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            ClientError::invalid_source_format("CSV header row is missing or unreadable.", "csv")
        })?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ClientError::source_schema_mismatch(
            REQUIRED_FIELDS.iter().map(|name| name.to_string()).collect(),
            OPTIONAL_FIELDS.iter().map(|name| name.to_string()).collect(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row.map_err(|_| {
            ClientError::invalid_source_format("CSV rows are malformed or not UTF-8.", "csv")
        })?;

        rows.push(ParsedRow {
            row: (row_index as i64) + 1,
            id: value_for(&record, &index_by_name, "id"),
            direction: value_for(&record, &index_by_name, "direction"),
            amount: value_for(&record, &index_by_name, "amount"),
            timestamp: value_for(&record, &index_by_name, "timestamp"),
            description: value_for(&record, &index_by_name, "description"),
            category: value_for(&record, &index_by_name, "category"),
            counterparty: value_for(&record, &index_by_name, "counterparty"),
        });
    }

    Ok(rows)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn read_optional_string(value: Option<&Value>) -> Option<String> {
    let current = value?;

    if current.is_null() {
        return None;
    }

    if let Value::Number(number) = current {
        return Some(number_text(number));
    }

    if let Some(string_value) = current.as_str() {
        return Some(string_value.to_string());
    }

    Some(current.to_string())
}

/// Source digits of a JSON number. Exponent forms are expanded so amount
/// validation sees plain decimal text.
fn number_text(number: &Number) -> String {
    let text = number.to_string();
    if text.contains(['e', 'E']) {
        if let Ok(value) = Decimal::from_scientific(&text) {
            return value.normalize().to_string();
        }
    }
    text
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    let has_required = REQUIRED_FIELDS
        .iter()
        .all(|required| actual_headers.iter().any(|value| value == required));
    let all_known = actual_headers.iter().all(|header| {
        REQUIRED_FIELDS.contains(&header.as_str()) || OPTIONAL_FIELDS.contains(&header.as_str())
    });
    has_required && all_known
}
