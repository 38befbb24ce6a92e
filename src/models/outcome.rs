use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Arguments of one tool invocation, keyed by parameter name.
pub type Arguments = Map<String, Value>;

/// Decoded body of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Render for an MCP text content block.
    pub fn to_text(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }
}

/// Classified failure of a single tool invocation.
///
/// Every per-call error ends up here; none of them are fatal to the server.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ToolError {
    /// Arguments failed schema validation. No request was sent.
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// The request failed before a response was received.
    #[error("Request failed: {0}")]
    Network(String),

    /// No response arrived within the configured ceiling.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The API answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// No tool is registered under the requested name.
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),
}

impl ToolError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Network(_) => "network_error",
            Self::Timeout(_) => "timeout_error",
            Self::Http { .. } => "http_error",
            Self::UnknownTool(_) => "unknown_tool",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::Network(msg) => msg.clone(),
            Self::Timeout(limit) => format!("no response within {}s", limit.as_secs()),
            Self::Http { message, .. } => message.clone(),
            Self::UnknownTool(name) => format!("no tool named '{}'", name),
        }
    }

    /// Structured form sent back to the agent.
    pub fn to_failure(&self) -> ToolFailure {
        ToolFailure {
            kind: self.kind(),
            message: self.message(),
            status: self.status(),
        }
    }
}

/// Serializable failure envelope.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolFailure {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}
