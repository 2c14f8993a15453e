use chrono::{Local, NaiveDateTime};
use walletview_client::commands::{self, offers::OffersRunOptions, statement::StatementRunOptions};
use walletview_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, DemoCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Statement {
            path, filters, now, ..
        } => commands::statement::run_with_options(StatementRunOptions {
            path: path.clone(),
            filters: filters.to_statement_args(),
            now: now.unwrap_or_else(local_now),
            stdin_override: None,
        }),
        Commands::Offers {
            path,
            search,
            today,
            ..
        } => commands::offers::run_with_options(OffersRunOptions {
            path: path.clone(),
            search: search.search.clone(),
            sort: search.sort.clone(),
            today: today.unwrap_or_else(|| local_now().date()),
            stdin_override: None,
        }),
        Commands::Demo { command } => match command {
            DemoCommand::Statement { filters, .. } => {
                commands::demo::statement(&filters.to_statement_args())
            }
            DemoCommand::Offers { search, .. } => {
                commands::demo::offers(search.search.as_deref(), search.sort.as_deref())
            }
        },
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn demo_topics_dispatch_to_their_commands() {
        let cases: [(&[&str], &str); 2] = [
            (&["walletview", "demo", "statement"], "statement"),
            (&["walletview", "demo", "offers"], "offers"),
        ];

        for (args, expected_command) in cases {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                let response = dispatch(&cli);
                assert!(response.is_ok());
                if let Ok(success) = response {
                    assert_eq!(success.command, expected_command);
                    let source = success
                        .statement()
                        .map(|data| data.source.as_str())
                        .or_else(|| success.offers().map(|data| data.source.as_str()));
                    assert_eq!(source, Some("sample"));
                }
            }
        }
    }

    #[test]
    fn demo_statement_passes_filters_through() {
        let parsed = parse_from(["walletview", "demo", "statement", "--category", "food"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_ok());
            if let Ok(success) = response {
                let data = success.statement();
                assert!(data.is_some());
                if let Some(data) = data {
                    assert_eq!(data.filters.category, "food");
                    assert_eq!(data.summary.transaction_count, 5);
                }
            }
        }
    }

    #[test]
    fn invalid_filter_values_surface_as_errors() {
        let parsed = parse_from(["walletview", "demo", "statement", "--type", "sideways"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_err());
            if let Err(error) = response {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }
}
