//! Tool invocation errors and their text rendering.

use canvas_client::ClientError;
use serde::Serialize;
use thiserror::Error;

use super::helpers::{error_json, error_json_with};

pub type ToolResult<T> = Result<T, ToolError>;

/// One argument that failed its declared schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {}", summarize(.violations))]
    InvalidArguments {
        tool: String,
        violations: Vec<FieldViolation>,
    },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Unexpected response from Canvas: {0}")]
    UnexpectedResponse(String),

    #[error("Failed to serialize tool output: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ToolError {
    /// Short machine-readable category for the rendered error.
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::InvalidArguments { .. } => "invalid_arguments",
            ToolError::Client(ClientError::ApiError { .. }) => "upstream_error",
            ToolError::Client(ClientError::ConfigError(_)) => "configuration_error",
            ToolError::Client(_) | ToolError::UnexpectedResponse(_) | ToolError::Serialization(_) => {
                "internal_error"
            }
        }
    }

    /// Render as the JSON text returned to the MCP client.
    pub fn render(&self) -> String {
        match self {
            ToolError::UnknownTool(name) => error_json(
                self.code(),
                &format!(
                    "Unknown tool: {}. Use tools/list to see the available Canvas tools.",
                    name
                ),
            ),
            ToolError::InvalidArguments { violations, .. } => error_json_with(
                self.code(),
                &self.to_string(),
                serde_json::json!({ "violations": violations }),
            ),
            ToolError::Client(ClientError::ApiError { status, message }) => error_json_with(
                self.code(),
                &self.to_string(),
                serde_json::json!({ "status": status, "body": message }),
            ),
            ToolError::Client(_) | ToolError::UnexpectedResponse(_) | ToolError::Serialization(_) => {
                error_json(self.code(), &format!("Error: {}", self))
            }
        }
    }
}
