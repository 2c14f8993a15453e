use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SourceIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub category: String,
    pub date_range: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementSummary {
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub net: Decimal,
    pub transaction_count: usize,
    pub group_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub direction: String,
    pub amount: Decimal,
    pub signed_amount: Decimal,
    pub timestamp: String,
    pub description: String,
    pub category: String,
    pub counterparty: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementGroup {
    pub date: String,
    pub date_label: String,
    pub transactions: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementData {
    pub source: String,
    pub now: String,
    pub rows_read: usize,
    pub filters: AppliedFilters,
    pub active_filters: Vec<String>,
    pub summary: StatementSummary,
    pub groups: Vec<StatementGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferRow {
    pub code: String,
    pub title: String,
    pub description: String,
    pub restaurant: Option<String>,
    pub discount_percent: u8,
    pub max_discount: Option<Decimal>,
    pub min_order: Decimal,
    pub expires_on: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OffersData {
    pub source: String,
    pub today: String,
    pub search: Option<String>,
    pub sort: String,
    pub rows_read: usize,
    pub rows: Vec<OfferRow>,
}
