use serde_json::Value;
use walletview_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];
    lines.extend(issue_lines(error.data.as_ref()));

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

const MAX_LISTED_ISSUES: usize = 10;

/// Source validation errors list one line per row issue.
fn issue_lines(data: Option<&Value>) -> Vec<String> {
    let Some(issues) = data
        .and_then(|value| value.get("issues"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut lines = vec![String::new(), "Issues:".to_string()];
    for issue in issues.iter().take(MAX_LISTED_ISSUES) {
        let row = issue.get("row").and_then(Value::as_i64).unwrap_or(0);
        let field = issue.get("field").and_then(Value::as_str).unwrap_or("?");
        let description = issue
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("");
        lines.push(format!("  row {row}, {field}: {description}"));
    }
    if issues.len() > MAX_LISTED_ISSUES {
        lines.push(format!(
            "  ... and {} more (rerun with --json for the full list)",
            issues.len() - MAX_LISTED_ISSUES
        ));
    }
    lines
}
