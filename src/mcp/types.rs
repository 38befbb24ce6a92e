//! Conversions between tool results and MCP response types.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Serialize;

use crate::models::{Payload, ToolError, ToolFailure};
use crate::registry::ToolSummary;

/// Error envelope returned to the agent in an `is_error` tool result.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ToolFailure,
}

/// MCP tool definition for a registry entry.
pub fn tool_definition(summary: ToolSummary<'_>) -> Tool {
    Tool::new(
        summary.name.to_string(),
        summary.description.to_string(),
        Arc::new(summary.input_schema),
    )
}

/// Successful call: JSON is pretty-printed, text is passed through.
pub fn success_result(payload: &Payload) -> CallToolResult {
    CallToolResult::success(vec![Content::text(payload.to_text())])
}

/// Failed call: a JSON error envelope flagged as a tool error.
pub fn failure_result(error: &ToolError) -> CallToolResult {
    let envelope = ErrorEnvelope {
        error: error.to_failure(),
    };
    let json = serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| error.to_string());
    CallToolResult::error(vec![Content::text(json)])
}
