//! The unfiltered catalog tool

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{no_arguments_schema, NoArguments};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Name of the catalog tool
pub const CATALOG_TOOL_NAME: &str = "getUIComponents";

const CATALOG_TOOL_DESCRIPTION: &str = "Provides a comprehensive list of all ui components.";
const FETCH_FAILED: &str = "Failed to fetch components";

/// Returns every component in the registry, as listed by the registry
#[derive(Default)]
pub struct CatalogTool;

impl CatalogTool {
    /// Creates a new instance of the CatalogTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CatalogTool {
    fn name(&self) -> &str {
        CATALOG_TOOL_NAME
    }

    fn description(&self) -> &str {
        CATALOG_TOOL_DESCRIPTION
    }

    fn schema(&self) -> serde_json::Value {
        no_arguments_schema()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let _: NoArguments = BaseToolImpl::parse_arguments(arguments)?;

        let entries = match context.registry.list_catalog().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Error fetching components: {}", e);
                return Ok(BaseToolImpl::create_error_response(FETCH_FAILED, None));
            }
        };

        match serde_json::to_string_pretty(&entries) {
            Ok(json) => {
                tracing::debug!("Returning {} catalog entries", entries.len());
                Ok(BaseToolImpl::create_success_response(json))
            }
            Err(e) => {
                tracing::error!("Error serializing components: {}", e);
                Ok(BaseToolImpl::create_error_response(FETCH_FAILED, None))
            }
        }
    }
}
