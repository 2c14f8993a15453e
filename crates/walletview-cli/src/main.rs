mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;
use walletview_client::ClientError;

const LOG_ENV: &str = "WALLETVIEW_LOG";

const ROOT_HELP: &str = "walletview - wallet statements and offers from the command line

Usage:
  walletview <command>

Try it:
  walletview demo statement                          Sample statement grouped by day
  walletview demo statement --type debit --range last-month
  walletview demo offers --sort discount             Sample offers, best discount first

Your own data:
  walletview statement <path|->                      Filter a JSON/CSV transaction file
  walletview offers <path|->                         Search a JSON offer file

Run `walletview statement --help` for the source format and every filter flag.
";

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_logging() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return Err(report_parse_error(&err, &raw_args)),
    };
    let mode = output::mode_for_command(&cli.command);
    log::debug!("running {:?} with {:?} output", raw_args.get(1), mode);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(ExitCode::from(1))
        }
    }
}

/// Help and version requests print and succeed; anything else clap rejects
/// becomes an `invalid_argument` failure in the requested output mode.
fn report_parse_error(err: &clap::Error, raw_args: &[String]) -> ExitCode {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        let text = if is_top_level_help_request(raw_args) {
            ROOT_HELP.to_string()
        } else {
            err.to_string()
        };
        if write_stdout_text(&text).is_err() {
            return ExitCode::from(2);
        }
        return ExitCode::SUCCESS;
    }

    let clean_message = strip_clap_boilerplate(&err.to_string());
    let error = ClientError::invalid_argument_for_command(
        &clean_message,
        command_path_from_args(raw_args).as_deref(),
    );
    if output::print_failure(&error, infer_requested_output_mode(raw_args)).is_err() {
        return ExitCode::from(2);
    }
    ExitCode::from(1)
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Drops clap's trailing usage block; recovery steps carry the guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let cut = message
        .find("\n\nUsage:")
        .or_else(|| message.find("\nFor more information"))
        .unwrap_or(message.len());
    message[..cut]
        .trim_start_matches("error: ")
        .trim_end()
        .to_string()
}

fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let words = raw_args
        .iter()
        .skip(1)
        .map(String::as_str)
        .take_while(|value| !value.starts_with('-'))
        .collect::<Vec<&str>>();

    let hint = match words.as_slice() {
        ["statement", ..] => "statement",
        ["offers", ..] => "offers",
        ["demo", "statement", ..] => "demo statement",
        ["demo", "offers", ..] => "demo offers",
        ["demo", ..] => "demo",
        _ => return None,
    };
    Some(hint.to_string())
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}
