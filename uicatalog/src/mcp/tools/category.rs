//! Generated per-category tools
//!
//! Each entry of the category table becomes one `get<Category>` tool. A tool
//! owns its own [`CategoryToolSpec`] and nothing else, so tools never share
//! per-call state.

use crate::categories::Category;
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
use crate::mcp::types::{no_arguments_schema, NoArguments};
use crate::snapshot::CatalogSnapshot;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Everything a category tool needs to know about its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryToolSpec {
    /// MCP tool name, `get<Category>`
    pub tool_name: String,
    /// Tool description listing the member components
    pub description: String,
    /// Category name used in logs and error messages
    pub category: String,
    /// Member component names in presentation order
    pub components: Vec<String>,
}

impl From<&Category> for CategoryToolSpec {
    fn from(category: &Category) -> Self {
        Self {
            tool_name: category.tool_name(),
            description: category.tool_description(),
            category: category.name.clone(),
            components: category.components.clone(),
        }
    }
}

/// Build one tool spec per category, in table order
pub fn category_tool_specs(categories: &[Category]) -> Vec<CategoryToolSpec> {
    categories.iter().map(CategoryToolSpec::from).collect()
}

/// Register one tool per category
pub fn register_category_tools(registry: &mut ToolRegistry, categories: &[Category]) -> Result<()> {
    for spec in category_tool_specs(categories) {
        registry.register(CategoryTool::new(spec))?;
    }
    Ok(())
}

/// Returns assembled detail records for the components of one category
pub struct CategoryTool {
    spec: CategoryToolSpec,
}

impl CategoryTool {
    /// Create a tool serving `spec`
    pub fn new(spec: CategoryToolSpec) -> Self {
        Self { spec }
    }

    /// The spec this tool serves
    pub fn spec(&self) -> &CategoryToolSpec {
        &self.spec
    }
}

#[async_trait]
impl McpTool for CategoryTool {
    fn name(&self) -> &str {
        &self.spec.tool_name
    }

    fn description(&self) -> &str {
        &self.spec.description
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

        let snapshot = CatalogSnapshot::load_best_effort(&*context.registry, &context.matcher).await;
        let outcome = context
            .resolver
            .resolve(
                &self.spec.category,
                &self.spec.components,
                &snapshot.components,
                &snapshot.index,
            )
            .await;

        match serde_json::to_string_pretty(&outcome.resolved) {
            Ok(json) => Ok(BaseToolImpl::create_success_response(json)),
            Err(e) => {
                tracing::error!("Error processing {} components: {}", self.spec.category, e);
                Ok(BaseToolImpl::create_error_response(
                    format!("Error processing {} components", self.spec.category),
                    Some(e.to_string()),
                ))
            }
        }
    }
}
