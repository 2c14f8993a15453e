use walletview_client::contracts::types::{AppliedFilters, StatementData, TransactionRow};

use super::format::{self, Column};
use super::money::{format_amount, format_signed};

pub fn render_statement(data: &StatementData) -> String {
    let summary = &data.summary;
    let mut lines = vec![
        format!("Statement for {} (as of {})", data.source, data.now),
        String::new(),
    ];

    lines.extend(format::key_value_rows(
        &[
            (
                "Transactions:",
                format!("{} of {}", summary.transaction_count, data.rows_read),
            ),
            ("Credit:", format_signed(summary.total_credit)),
            ("Debit:", format!("-{}", format_amount(summary.total_debit))),
            ("Net:", format_signed(summary.net)),
            ("Filters:", describe_filters(data)),
        ],
        2,
    ));

    if data.groups.is_empty() {
        lines.push(String::new());
        lines.push("No transactions match the current filters.".to_string());
        if !data.active_filters.is_empty() {
            lines.push("Drop a filter flag, or rerun without filters to see everything.".to_string());
        }
        return lines.join("\n");
    }

    let columns = [
        Column::left("Time"),
        Column::left("Description"),
        Column::left("Counterparty"),
        Column::left("Category"),
        Column::right("Amount"),
    ];
    let width = format::terminal_width();

    for group in &data.groups {
        lines.push(String::new());
        lines.push(group.date_label.clone());

        let rows = group
            .transactions
            .iter()
            .map(|row| {
                vec![
                    time_of_day(row),
                    row.description.clone(),
                    row.counterparty.clone().unwrap_or_else(|| "-".to_string()),
                    row.category.clone(),
                    format_signed(row.signed_amount),
                ]
            })
            .collect::<Vec<Vec<String>>>();
        lines.extend(format::render_table_or_blocks(
            &columns,
            &rows,
            width,
            "Transaction",
        ));
    }

    lines.join("\n")
}

fn describe_filters(data: &StatementData) -> String {
    let filters = &data.filters;
    let parts = data
        .active_filters
        .iter()
        .map(|key| match key.as_str() {
            "type" => format!("type={}", filters.transaction_type),
            "category" => format!("category={}", filters.category),
            "date_range" => describe_range(filters),
            "min_amount" => format!("min={}", or_dash(filters.min_amount.as_deref())),
            "max_amount" => format!("max={}", or_dash(filters.max_amount.as_deref())),
            "search" => format!("search=\"{}\"", or_dash(filters.search.as_deref())),
            other => other.to_string(),
        })
        .collect::<Vec<String>>();

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

fn describe_range(filters: &AppliedFilters) -> String {
    if filters.date_range != "custom" {
        return format!("range={}", filters.date_range.replace('_', "-"));
    }
    let from = filters.from.as_deref().unwrap_or("start");
    let to = filters.to.as_deref().unwrap_or("end");
    format!("range={from}..{to}")
}

fn time_of_day(row: &TransactionRow) -> String {
    row.timestamp.get(11..16).unwrap_or("").to_string()
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
