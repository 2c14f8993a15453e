use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use walletview_client::commands::statement::StatementFilterArgs;
use walletview_client::filter::date::{parse_iso_date, parse_timestamp};

pub fn parse_reference_time(value: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(value).ok_or_else(|| {
        "time must use YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS] with real calendar values".to_string()
    })
}

pub fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value)
        .ok_or_else(|| "date must use YYYY-MM-DD format with real calendar values".to_string())
}

/// Extended help shown after `walletview statement --help`.
pub const STATEMENT_AFTER_HELP: &str = "\
Source formats:
  JSON  one top-level array of transaction objects
  CSV   one header row with the field names below

  <path> is a local file path. Use `-` to read stdin.
  Example: cat wallet.csv | walletview statement - --type debit

Fields:
  id           (required)  unique within the source
  direction    (required)  credit or debit
  amount       (required)  non-negative number; the direction carries the sign
  timestamp    (required)  YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]
  description  (required)
  category     (optional)  deposit, food, reward or other (default other)
  counterparty (optional)

Filters:
  All filters combine. `--from`/`--to` select a custom range and cover whole
  days. `--min`/`--max` accept text such as `$1,200`; a value that is not a
  number is ignored. Relative ranges are measured from `--now`, which defaults
  to the local clock.
";

#[derive(Debug, Parser)]
#[command(
    name = "walletview",
    version,
    about = "wallet statement filtering and offer search",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a filtered wallet statement grouped by day
    #[command(after_long_help = STATEMENT_AFTER_HELP)]
    Statement {
        /// Path to a JSON or CSV transaction file (use `-` for stdin)
        path: String,
        #[command(flatten)]
        filters: FilterArgs,
        /// Reference time for relative ranges (defaults to now)
        #[arg(long, value_parser = parse_reference_time)]
        now: Option<NaiveDateTime>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Search and sort restaurant offers, hiding expired ones
    Offers {
        /// Path to a JSON offer file (use `-` for stdin)
        path: String,
        #[command(flatten)]
        search: OfferArgs,
        /// Day used to hide expired offers (defaults to today)
        #[arg(long, value_parser = parse_reference_date)]
        today: Option<NaiveDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Try walletview against bundled sample data
    #[command(arg_required_else_help = true)]
    Demo {
        #[command(subcommand)]
        command: DemoCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DemoCommand {
    /// Sample wallet statement, as of 2023-05-20T12:00:00
    Statement {
        #[command(flatten)]
        filters: FilterArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Sample offers, as of 2023-05-20
    Offers {
        #[command(flatten)]
        search: OfferArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Transaction type: all, credit or debit
    #[arg(long = "type")]
    pub transaction_type: Option<String>,
    /// Category: all, deposit, food, reward or other
    #[arg(long)]
    pub category: Option<String>,
    /// Date range: all, this-month, last-month, last-3-months or custom
    #[arg(long)]
    pub range: Option<String>,
    /// First day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Last day of a custom range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    /// Minimum amount, inclusive
    #[arg(long = "min", allow_hyphen_values = true)]
    pub min_amount: Option<String>,
    /// Maximum amount, inclusive
    #[arg(long = "max", allow_hyphen_values = true)]
    pub max_amount: Option<String>,
    /// Case-insensitive text matched against description and counterparty
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_statement_args(&self) -> StatementFilterArgs {
        StatementFilterArgs {
            transaction_type: self.transaction_type.clone(),
            category: self.category.clone(),
            range: self.range.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            min_amount: self.min_amount.clone(),
            max_amount: self.max_amount.clone(),
            search: self.search.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OfferArgs {
    /// Case-insensitive text matched against code, title, description and restaurant
    #[arg(long)]
    pub search: Option<String>,
    /// Sort order: featured, discount, expiring or min-order
    #[arg(long)]
    pub sort: Option<String>,
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use super::{Commands, DemoCommand, parse_from};

    #[test]
    fn parse_statement_with_every_filter_flag() {
        let parsed = parse_from([
            "walletview",
            "statement",
            "wallet.csv",
            "--type",
            "debit",
            "--category",
            "food",
            "--from",
            "2023-05-01",
            "--to",
            "2023-05-31",
            "--min",
            "$10",
            "--max",
            "1,000",
            "--search",
            "pizza",
            "--now",
            "2023-06-02T08:00",
            "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let Commands::Statement {
                path,
                filters,
                now,
                json,
            } = cli.command
            else {
                panic!("expected statement command");
            };
            assert_eq!(path, "wallet.csv");
            assert!(json);
            assert!(now.is_some());
            let args = filters.to_statement_args();
            assert_eq!(args.transaction_type.as_deref(), Some("debit"));
            assert_eq!(args.min_amount.as_deref(), Some("$10"));
            assert_eq!(args.max_amount.as_deref(), Some("1,000"));
            assert_eq!(args.search.as_deref(), Some("pizza"));
        }
    }

    #[test]
    fn parse_rejects_an_unreal_reference_time() {
        let parsed = parse_from(["walletview", "statement", "-", "--now", "2023-02-30"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn parse_offers_with_sort_and_today() {
        let parsed = parse_from([
            "walletview",
            "offers",
            "offers.json",
            "--sort",
            "expiring",
            "--today",
            "2023-05-20",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Offers {
                    today: Some(_),
                    json: false,
                    ..
                }
            ));
        }
    }

    #[test]
    fn parse_demo_topics() {
        let statement = parse_from(["walletview", "demo", "statement", "--type", "credit"]);
        assert!(statement.is_ok());
        if let Ok(cli) = statement {
            assert!(matches!(
                cli.command,
                Commands::Demo {
                    command: DemoCommand::Statement { json: false, .. }
                }
            ));
        }

        let offers = parse_from(["walletview", "demo", "offers", "--json"]);
        assert!(offers.is_ok());

        let unknown = parse_from(["walletview", "demo", "dashboard"]);
        assert!(unknown.is_err());
    }

    #[test]
    fn statement_requires_a_path() {
        let parsed = parse_from(["walletview", "statement"]);
        assert!(parsed.is_err());
    }
}
