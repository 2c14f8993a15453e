use walletview_client::contracts::types::OffersData;

use super::format::{self, Column};
use super::money::{format_amount, format_optional};

pub fn render_offers(data: &OffersData) -> String {
    let mut heading = format!(
        "Offers available on {}, sorted by {}",
        data.today,
        data.sort.replace('_', " ")
    );
    if let Some(search) = data.search.as_deref() {
        heading.push_str(&format!(", matching \"{search}\""));
    }
    let mut lines = vec![heading, String::new()];

    if data.rows.is_empty() {
        lines.push("No offers match.".to_string());
        lines.push("Expired offers are hidden; try a shorter search term.".to_string());
        return lines.join("\n");
    }

    let columns = [
        Column::left("Code"),
        Column::left("Offer"),
        Column::left("Restaurant"),
        Column::right("Discount"),
        Column::right("Cap"),
        Column::right("Min order"),
        Column::left("Expires"),
    ];
    let table_rows = data
        .rows
        .iter()
        .map(|row| {
            vec![
                row.code.clone(),
                row.title.clone(),
                row.restaurant.clone().unwrap_or_else(|| "any".to_string()),
                format!("{}%", row.discount_percent),
                format_optional(row.max_discount, "-"),
                format_amount(row.min_order),
                row.expires_on.clone().unwrap_or_else(|| "never".to_string()),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Offer",
    ));
    lines.push(String::new());
    lines.push(format!(
        "{} of {} offers shown.",
        data.rows.len(),
        data.rows_read
    ));

    lines.join("\n")
}
