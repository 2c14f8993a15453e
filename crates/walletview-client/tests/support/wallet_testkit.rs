#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::{Builder, TempDir};
use walletview_client::filter::date::parse_timestamp;
use walletview_client::{Category, Direction, Transaction};

pub fn at(value: &str) -> NaiveDateTime {
    let parsed = parse_timestamp(value);
    assert!(parsed.is_some(), "fixture timestamp `{value}` must parse");
    parsed.unwrap_or_default()
}

pub fn amount(value: &str) -> Decimal {
    let parsed = value.parse::<Decimal>();
    assert!(parsed.is_ok(), "fixture amount `{value}` must parse");
    parsed.unwrap_or_default()
}

pub fn txn(
    id: &str,
    direction: Direction,
    value: &str,
    timestamp: &str,
    description: &str,
    counterparty: Option<&str>,
) -> Transaction {
    let built = Transaction::new(id, direction, amount(value), at(timestamp), description);
    match built {
        Ok(transaction) => transaction.with_counterparty(counterparty),
        Err(error) => panic!("fixture transaction `{id}` failed: {error}"),
    }
}

/// The three-row wallet used by the statement scenarios.
pub fn three_rows() -> Vec<Transaction> {
    vec![
        txn("1", Direction::Credit, "100", "2023-05-18", "Added money", Some("UPI"))
            .with_category(Category::Deposit),
        txn("2", Direction::Debit, "45.5", "2023-05-17", "Order #123", Some("Burger Barn"))
            .with_category(Category::Food),
        txn("3", Direction::Credit, "200", "2023-05-15", "Added money", Some("Credit Card"))
            .with_category(Category::Deposit),
    ]
}

/// A longer history spanning several months, newest first.
pub fn history() -> Vec<Transaction> {
    vec![
        txn("h9", Direction::Debit, "12.40", "2023-05-19T21:00:00", "Order #9", Some("Pizza Palace"))
            .with_category(Category::Food),
        txn("h8", Direction::Credit, "50", "2023-05-18T09:00:00", "Added money", Some("UPI"))
            .with_category(Category::Deposit),
        txn("h7", Direction::Credit, "5", "2023-05-18T08:00:00", "Cashback", None)
            .with_category(Category::Reward),
        txn("h6", Direction::Debit, "80", "2023-04-30T23:59:59", "Order #6", Some("Curry House"))
            .with_category(Category::Food),
        txn("h5", Direction::Debit, "22", "2023-04-02T12:00:00", "Order #5", Some("Pizza Palace"))
            .with_category(Category::Food),
        txn("h4", Direction::Credit, "300", "2023-03-10T10:00:00", "Added money", Some("Net Banking"))
            .with_category(Category::Deposit),
        txn("h3", Direction::Debit, "15", "2023-02-01T00:00:00", "Membership", Some("Credit Card")),
        txn("h2", Direction::Debit, "60", "2023-01-31T23:00:00", "Order #2", Some("Sushi Central"))
            .with_category(Category::Food),
        txn("h1", Direction::Credit, "25", "2023-01-05T10:00:00", "Referral bonus", None)
            .with_category(Category::Reward),
    ]
}

pub fn temp_dir(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir()
}

pub fn write_fixture(base: &Path, name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = base.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

pub fn row_json(id: &str, direction: &str, amount: Value, timestamp: &str) -> Value {
    json!({
        "id": id,
        "direction": direction,
        "amount": amount,
        "timestamp": timestamp,
        "description": format!("Entry {id}"),
    })
}
