//! MCP server exposing the tool registry over stdio.

mod types;

pub use types::*;

use std::sync::Arc;
use std::time::Instant;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};

use crate::credential::Credential;
use crate::executor::Executor;
use crate::models::{Arguments, Payload, ToolError};
use crate::registry::{RegistryError, ToolRegistry};

#[derive(Clone)]
pub struct Mobi2GoServer {
    registry: Arc<ToolRegistry>,
    executor: Executor,
    credential: Credential,
}

impl Mobi2GoServer {
    pub fn new(registry: ToolRegistry, executor: Executor, credential: Credential) -> Self {
        Self {
            registry: Arc::new(registry),
            executor,
            credential,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// MCP definitions for every registered tool.
    pub fn tool_definitions(&self) -> Vec<Tool> {
        self.registry.list().map(tool_definition).collect()
    }

    /// Resolve and execute one tool.
    pub async fn invoke(&self, name: &str, arguments: &Arguments) -> Result<Payload, ToolError> {
        let descriptor = self.registry.resolve(name).map_err(|e| match e {
            RegistryError::UnknownTool(name) => ToolError::UnknownTool(name),
            other => ToolError::Validation(other.to_string()),
        })?;

        self.executor
            .execute(descriptor, &self.credential, arguments)
            .await
    }

    /// Invoke a tool and translate the outcome into an MCP result.
    ///
    /// Unknown tools are protocol errors; every other failure is reported as
    /// an `is_error` tool result so the agent can read it.
    pub async fn call(&self, name: &str, arguments: Arguments) -> Result<CallToolResult, McpError> {
        let keys: Vec<&str> = arguments.keys().map(String::as_str).collect();
        tracing::info!(tool = name, args = ?keys, "Tool call");
        let started = Instant::now();

        match self.invoke(name, &arguments).await {
            Ok(payload) => {
                tracing::info!(
                    tool = name,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Tool call succeeded"
                );
                Ok(success_result(&payload))
            }
            Err(ToolError::UnknownTool(name)) => {
                tracing::warn!(tool = %name, "Unknown tool requested");
                Err(McpError::invalid_params(
                    format!("Unknown tool '{}'", name),
                    None,
                ))
            }
            Err(e) => {
                tracing::warn!(
                    tool = name,
                    kind = e.kind(),
                    status = e.status(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Tool call failed: {}",
                    e
                );
                Ok(failure_result(&e))
            }
        }
    }
}

impl ServerHandler for Mobi2GoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Mobi2Go".into()),
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Tools for the Mobi2Go restaurant management API.

Most tools are scoped to a headoffice (and often a location). If you do not
know the IDs yet:
1. Call get_headoffices_permissions to find the headoffices you can manage
2. Call get_locations_for_headoffice to list its locations

Results are returned as the API sends them: JSON for most tools, raw HTML for
get_html_sales_report and get_receipt_for_group_tab.

Failed calls return an error object with a kind (validation_error,
network_error, timeout_error, http_error) and the server's message. Calls are
never retried automatically; fix the arguments or retry yourself."#
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tool_definitions()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        self.call(&request.name, arguments).await
    }
}

pub async fn run_stdio_server(server: Mobi2GoServer) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!(tools = server.registry().len(), "Starting MCP server via stdio");

    let service = server.serve((stdin(), stdout())).await?;

    let quit_reason = service.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
