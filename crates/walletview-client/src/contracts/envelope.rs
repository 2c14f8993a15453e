//! Top-level response shapes. The JSON output prints these as they are; the
//! text renderers match on [`CommandOutput`] directly.

use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::contracts::types::{OffersData, StatementData};
use crate::error::ClientError;

/// Payload of a successful command. The variant decides the envelope's
/// `command` name.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Statement(StatementData),
    Offers(OffersData),
}

impl CommandOutput {
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Statement(_) => "statement",
            Self::Offers(_) => "offers",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: &'static str,
    pub version: &'static str,
    pub data: CommandOutput,
}

impl SuccessEnvelope {
    pub fn new(data: CommandOutput) -> Self {
        Self {
            ok: true,
            command: data.command(),
            version: API_VERSION,
            data,
        }
    }

    pub fn statement(&self) -> Option<&StatementData> {
        match &self.data {
            CommandOutput::Statement(data) => Some(data),
            CommandOutput::Offers(_) => None,
        }
    }

    pub fn offers(&self) -> Option<&OffersData> {
        match &self.data {
            CommandOutput::Offers(data) => Some(data),
            CommandOutput::Statement(_) => None,
        }
    }
}

impl From<StatementData> for SuccessEnvelope {
    fn from(data: StatementData) -> Self {
        Self::new(CommandOutput::Statement(data))
    }
}

impl From<OffersData> for SuccessEnvelope {
    fn from(data: OffersData) -> Self {
        Self::new(CommandOutput::Offers(data))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub version: &'static str,
    pub error: ErrorContract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

impl From<&ClientError> for FailureEnvelope {
    fn from(error: &ClientError) -> Self {
        Self {
            ok: false,
            version: API_VERSION,
            error: ErrorContract {
                code: error.code.clone(),
                message: error.message.clone(),
                recovery_steps: error.recovery_steps.clone(),
            },
            data: error.data.clone(),
        }
    }
}
