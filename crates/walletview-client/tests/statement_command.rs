mod support;

use rust_decimal::Decimal;
use serde_json::{Value, json};
use support::wallet_testkit::{at, row_json, temp_dir, write_fixture};
use walletview_client::commands::offers::{self, OffersRunOptions};
use walletview_client::commands::statement::{self, StatementFilterArgs, StatementRunOptions};
use walletview_client::contracts::types::StatementData;

const NOW: &str = "2023-05-20T12:00:00";

fn fixture_rows() -> Value {
    json!([
        row_json("1", "credit", json!(100), "2023-05-18T10:30:00"),
        row_json("2", "debit", json!("45.5"), "2023-05-17T20:15:00"),
        row_json("3", "credit", json!(200), "2023-05-15"),
    ])
}

fn options(path: &str, filters: StatementFilterArgs, stdin: Option<String>) -> StatementRunOptions {
    StatementRunOptions {
        path: path.to_string(),
        filters,
        now: at(NOW),
        stdin_override: stdin,
    }
}

fn ids(data: &StatementData) -> Vec<String> {
    data.groups
        .iter()
        .flat_map(|group| group.transactions.iter().map(|row| row.id.clone()))
        .collect()
}

#[test]
fn statement_reads_a_json_file_and_applies_filters() {
    let dir = temp_dir("walletview-statement");
    assert!(dir.is_ok());
    let Ok(dir) = dir else {
        return;
    };
    let path = write_fixture(dir.path(), "wallet.json", &fixture_rows().to_string());
    assert!(path.is_ok());
    let Ok(path) = path else {
        return;
    };
    let path_text = path.to_string_lossy().to_string();

    let response = statement::run_with_options(options(
        &path_text,
        StatementFilterArgs {
            transaction_type: Some("credit".to_string()),
            ..StatementFilterArgs::default()
        },
        None,
    ));
    assert!(response.is_ok());
    if let Ok(success) = response {
        assert_eq!(success.command, "statement");
        let data = success.statement();
        assert!(data.is_some());
        if let Some(data) = data {
            assert_eq!(data.source, path_text);
            assert_eq!(data.rows_read, 3);
            assert_eq!(data.filters.transaction_type, "credit");
            assert_eq!(data.active_filters, vec!["type".to_string()]);
            assert_eq!(data.summary.total_credit, Decimal::from(300));
            assert_eq!(data.summary.total_debit, Decimal::ZERO);
            assert_eq!(data.summary.group_count, 2);
            assert_eq!(data.groups[0].date, "2023-05-18");
            assert_eq!(data.groups[0].date_label, "18 May 2023");
            assert_eq!(ids(data), vec!["1", "3"]);
        }

        let serialized = serde_json::to_value(&success);
        assert!(serialized.is_ok());
        if let Ok(value) = serialized {
            assert_eq!(value["command"], "statement");
            assert_eq!(value["data"]["filters"]["type"], "credit");
            assert_eq!(value["data"]["summary"]["total_credit"], "300");
        }
    }
}

#[test]
fn statement_reads_csv_from_stdin() {
    let csv = "id,direction,amount,timestamp,description,category,counterparty\n\
               1,credit,100,2023-05-18,Added money,deposit,UPI\n\
               2,debit,45.5,2023-05-17,Order #123,food,Pizza Palace\n";
    let response = statement::run_with_options(options(
        "-",
        StatementFilterArgs {
            search: Some("pizza".to_string()),
            ..StatementFilterArgs::default()
        },
        Some(csv.to_string()),
    ));
    assert!(response.is_ok());
    if let Ok(success) = response {
        let data = success.statement();
        assert!(data.is_some());
        if let Some(data) = data {
            assert_eq!(data.source, "stdin");
            assert_eq!(ids(data), vec!["2"]);
            assert_eq!(data.groups[0].transactions[0].signed_amount, Decimal::new(-455, 1));
            assert_eq!(data.groups[0].transactions[0].category, "food");
        }
    }
}

#[test]
fn empty_stdin_is_an_invalid_argument() {
    let response = statement::run_with_options(options(
        "-",
        StatementFilterArgs::default(),
        Some("   ".to_string()),
    ));
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "invalid_argument");
        assert!(error.message.contains("stdin"));
    }
}

#[test]
fn missing_files_are_reported_with_their_path() {
    let response = statement::run_with_options(options(
        "/definitely/not/here/wallet.json",
        StatementFilterArgs::default(),
        None,
    ));
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "invalid_argument");
        assert!(error.message.contains("/definitely/not/here/wallet.json"));
    }
}

#[test]
fn invalid_rows_are_listed_with_row_numbers() {
    let rows = json!([
        row_json("1", "credit", json!(100), "2023-05-18"),
        row_json("2", "sideways", json!(10), "2023-05-17"),
        row_json("3", "debit", json!(5), "2023-02-30"),
    ]);
    let response = statement::run_with_options(options(
        "-",
        StatementFilterArgs::default(),
        Some(rows.to_string()),
    ));
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "invalid_transaction_source");
        let data = error.data.unwrap_or_default();
        assert_eq!(data["rows_read"], 3);
        assert_eq!(data["rows_invalid"], 2);
        assert_eq!(data["issues"][0]["row"], 2);
        assert_eq!(data["issues"][0]["code"], "invalid_direction");
        assert_eq!(data["issues"][1]["row"], 3);
        assert_eq!(data["issues"][1]["code"], "invalid_timestamp");
    }
}

#[test]
fn filter_flags_are_checked_before_the_source_is_read() {
    let response = statement::run_with_options(options(
        "/definitely/not/here/wallet.json",
        StatementFilterArgs {
            range: Some("fortnight".to_string()),
            ..StatementFilterArgs::default()
        },
        None,
    ));
    assert!(response.is_err());
    if let Err(error) = response {
        assert!(error.message.contains("--range"));
    }
}

#[test]
fn offers_read_from_stdin_and_sort_by_discount() {
    let body = json!([
        {"code": "SMALL", "title": "Small", "discount_percent": 5},
        {"code": "BIG", "title": "Big", "discount_percent": 40, "expires_on": "2023-06-01"},
        {"code": "OLD", "title": "Old", "discount_percent": 60, "expires_on": "2023-05-01"}
    ]);
    let today = at(NOW).date();
    let response = offers::run_with_options(OffersRunOptions {
        path: "-".to_string(),
        search: None,
        sort: Some("discount".to_string()),
        today,
        stdin_override: Some(body.to_string()),
    });
    assert!(response.is_ok());
    if let Ok(success) = response {
        assert_eq!(success.command, "offers");
        let data = success.offers();
        assert!(data.is_some());
        if let Some(data) = data {
            assert_eq!(data.rows_read, 3);
            assert_eq!(data.sort, "discount");
            let codes = data.rows.iter().map(|row| row.code.as_str()).collect::<Vec<&str>>();
            assert_eq!(codes, vec!["BIG", "SMALL"]);
        }
    }
}
