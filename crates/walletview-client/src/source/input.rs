use std::fs;
use std::io::{IsTerminal, Read};

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SourceKind {
    File,
    Stdin,
    Sample,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdin => "stdin",
            Self::Sample => "sample",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub kind: SourceKind,
    pub location: Option<String>,
    pub content: String,
}

impl ResolvedSource {
    pub fn describe(&self) -> String {
        match &self.location {
            Some(location) => location.clone(),
            None => self.kind.as_str().to_string(),
        }
    }
}

/// Reads a source from a file path, or from stdin when the path is `-`.
pub fn resolve_source(path: &str, stdin_override: Option<String>) -> ClientResult<ResolvedSource> {
    if path == "-" {
        let Some(content) = read_stdin(stdin_override)? else {
            return Err(ClientError::invalid_argument_with_recovery(
                "Path `-` means stdin input, but stdin was empty.",
                vec!["Pipe JSON/CSV input or pass a file path.".to_string()],
            ));
        };
        return Ok(ResolvedSource {
            kind: SourceKind::Stdin,
            location: None,
            content,
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|error| ClientError::source_unreadable(path, &error.to_string()))?;
    Ok(ResolvedSource {
        kind: SourceKind::File,
        location: Some(path.to_string()),
        content,
    })
}

fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(Some(value).filter(|body| !body.trim().is_empty()));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| ClientError::source_unreadable("stdin", &error.to_string()))?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer))
}
