use rust_decimal::Decimal;

/// Two-decimal rendering for tables and summaries.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Like [`format_amount`] but always shows the sign. Zero counts as positive.
pub fn format_signed(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format_amount(amount)
    } else {
        format!("+{}", format_amount(amount))
    }
}

pub fn format_optional(amount: Option<Decimal>, fallback: &str) -> String {
    amount.map_or_else(|| fallback.to_string(), format_amount)
}
