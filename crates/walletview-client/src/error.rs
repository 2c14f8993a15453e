use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::SourceIssue;

pub(crate) const STATEMENT_HELP_COMMAND: &str = "walletview statement --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `walletview {cmd} --help` for usage."),
            None => "Run `walletview --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_transaction(id: &str, message: &str) -> Self {
        Self::new(
            "invalid_transaction",
            message,
            vec!["Fix the transaction record and rebuild it.".to_string()],
        )
        .with_data(json!({
            "id": id,
        }))
    }

    pub fn invalid_source_format(message: &str, received_format: &str) -> Self {
        Self::invalid_argument_with_recovery(
            message,
            vec![
                "Provide a supported source format (JSON array or CSV).".to_string(),
                format!("Run `{STATEMENT_HELP_COMMAND}` to confirm field requirements."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
            "help_command": STATEMENT_HELP_COMMAND,
        }))
    }

    pub fn source_schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "source_schema_mismatch",
            "CSV headers do not satisfy the transaction schema.",
            vec![
                "Include all required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
                format!("Run `{STATEMENT_HELP_COMMAND}` to review the field list."),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "actual_headers": actual_headers,
        }))
    }

    /// `kind` is `transaction` or `offer`; the code becomes
    /// `invalid_<kind>_source`.
    pub fn invalid_source(kind: &str, rows_read: usize, issues: Vec<SourceIssue>) -> Self {
        let invalid_rows = issues
            .iter()
            .map(|issue| issue.row)
            .collect::<std::collections::BTreeSet<i64>>()
            .len();
        Self::new(
            &format!("invalid_{kind}_source"),
            &format!("Source failed validation: {invalid_rows} of {rows_read} rows need fixes."),
            vec![
                "Fix the listed issues in your source file.".to_string(),
                "Rerun the command with the corrected file.".to_string(),
            ],
        )
        .with_data(json!({
            "rows_read": rows_read,
            "rows_invalid": invalid_rows,
            "issues": issues,
        }))
    }

    pub fn source_unreadable(location: &str, detail: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("Could not read source `{location}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Or pass `-` and pipe the source via stdin.".to_string(),
            ],
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
