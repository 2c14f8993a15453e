mod error_text;
mod format;
mod json;
mod mode;
mod money;
mod offers_text;
mod statement_text;

use std::io;

use walletview_client::{ClientError, CommandOutput, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success),
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> String {
    match &success.data {
        CommandOutput::Statement(data) => statement_text::render_statement(data),
        CommandOutput::Offers(data) => offers_text::render_offers(data),
    }
}
