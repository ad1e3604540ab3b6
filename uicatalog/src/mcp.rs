//! Model Context Protocol (MCP) server support

use crate::assembler::ComponentAssembler;
use crate::config::Config;
use crate::dependency_index::DependencyMatcher;
use crate::registry::RegistryClient;
use crate::resolver::CategoryResolver;
use crate::schema::OutputSchema;
use crate::snapshot::CatalogSnapshot;
use crate::{CatalogError, Result};
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

/// MCP module structure
pub mod tool_registry;
pub mod tools;
pub mod types;

use tool_registry::{ToolContext, ToolRegistry};
use tools::{register_category_tools, CatalogTool};

const SERVER_NAME: &str = "uicatalog";
const SERVER_INSTRUCTIONS: &str = "Serves a UI component registry. Call getUIComponents for the full catalog, or a get<Category> tool (for example getRatings) for install instructions, source code and usage examples of every component in that category.";

/// MCP server exposing the catalog tool and one tool per category
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
    limited: bool,
}

impl McpServer {
    /// Load the registry once and register every tool
    ///
    /// Fails if the configuration is invalid or either registry list cannot
    /// be fetched. Tools are registered before this returns, so the server
    /// is complete before any transport is connected.
    pub async fn initialize(config: Arc<Config>, registry: Arc<dyn RegistryClient>) -> Result<Self> {
        let context = Self::build_context(&config, registry)?;

        let snapshot = CatalogSnapshot::load(&*context.registry, &context.matcher).await?;
        tracing::info!(
            "Loaded {} components and {} examples; {} components have linked examples",
            snapshot.components.len(),
            snapshot.example_count,
            snapshot.index.len()
        );
        for category in &config.categories {
            let missing: Vec<&str> = category
                .components
                .iter()
                .filter(|name| snapshot.component(name).is_none())
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                tracing::warn!(
                    "Category {} lists components missing from the catalog: {}",
                    category.name,
                    missing.join(", ")
                );
            }
        }

        let mut tool_registry = ToolRegistry::new();
        tool_registry.register(CatalogTool::new())?;
        register_category_tools(&mut tool_registry, &config.categories)?;
        tracing::info!("Registered {} tools", tool_registry.len());

        Ok(Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(context),
            limited: false,
        })
    }

    /// Build a server offering only the catalog tool
    ///
    /// Used when [`McpServer::initialize`] fails; nothing is fetched here.
    pub fn limited(config: Arc<Config>, registry: Arc<dyn RegistryClient>) -> Result<Self> {
        let context = Self::build_context(&config, registry)?;

        let mut tool_registry = ToolRegistry::new();
        tool_registry.register(CatalogTool::new())?;
        tracing::warn!("Starting in limited mode with only the catalog tool");

        Ok(Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(context),
            limited: true,
        })
    }

    fn build_context(config: &Arc<Config>, registry: Arc<dyn RegistryClient>) -> Result<ToolContext> {
        config.validate()?;
        let host = config
            .registry_host()
            .ok_or_else(|| CatalogError::Other("registry host is not configured".to_string()))?;

        let assembler = ComponentAssembler::new(
            Arc::clone(&registry),
            Arc::clone(config),
            Arc::new(OutputSchema::new()?),
        );
        Ok(ToolContext::new(
            registry,
            Arc::new(CategoryResolver::new(assembler)),
            DependencyMatcher::new(host),
        ))
    }

    /// Whether only the catalog tool is available
    pub fn is_limited(&self) -> bool {
        self.limited
    }

    /// Names of the registered tools in listing order
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }

    /// The registered tools as advertised to clients
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Run a tool by name without an MCP peer
    pub async fn call_tool_by_name(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => {
                tracing::debug!("Calling tool {}", name);
                tool.execute(arguments, &self.tool_context).await
            }
            None => Err(McpError::invalid_request(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call_tool_by_name(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(true),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(SERVER_INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::registry::MockRegistryClient;

    /// Tool context over a mock registry with default configuration
    pub(crate) fn tool_context(registry: MockRegistryClient) -> ToolContext {
        McpServer::build_context(&Arc::new(Config::default()), Arc::new(registry))
            .expect("default configuration is valid")
    }

    /// Text of the first content item
    pub(crate) fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text_content) => &text_content.text,
            _ => panic!("Expected text content"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use crate::registry::{ComponentSummary, MockRegistryClient};

    fn registry() -> Arc<dyn RegistryClient> {
        Arc::new(MockRegistryClient::new().with_component(
            ComponentSummary::new("star-rating-basic", "registry:ui", "Stars"),
            Some("code"),
        ))
    }

    #[tokio::test]
    async fn test_server_info() {
        let server = McpServer::limited(Arc::new(Config::default()), registry()).unwrap();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "uicatalog");
        assert_eq!(info.server_info.version, crate::VERSION);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("getUIComponents"));
    }

    #[tokio::test]
    async fn test_initialize_registers_catalog_then_categories() {
        let server = McpServer::initialize(Arc::new(Config::default()), registry())
            .await
            .unwrap();

        assert!(!server.is_limited());
        assert_eq!(
            server.tool_names(),
            ["getUIComponents", "getRatings", "getAnotherSampleCategory"]
        );
        let tools = server.tools();
        assert_eq!(
            tools[0].description.as_deref(),
            Some("Provides a comprehensive list of all ui components.")
        );
    }

    #[tokio::test]
    async fn test_initialize_fails_when_a_list_fails() {
        let failing: Arc<dyn RegistryClient> =
            Arc::new(MockRegistryClient::new().failing_example_list());
        let result = McpServer::initialize(Arc::new(Config::default()), failing).await;
        assert!(matches!(result, Err(CatalogError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_limited_mode_only_has_catalog_tool() {
        let failing: Arc<dyn RegistryClient> =
            Arc::new(MockRegistryClient::new().failing_component_list());
        let server = McpServer::limited(Arc::new(Config::default()), failing).unwrap();

        assert!(server.is_limited());
        assert_eq!(server.tool_names(), ["getUIComponents"]);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let config = Config {
            categories: vec![Category::new("Ratings", vec!["a"]), Category::new("Ratings", vec!["b"])],
            ..Config::default()
        };
        let result = McpServer::initialize(Arc::new(config), registry()).await;
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_request() {
        let server = McpServer::limited(Arc::new(Config::default()), registry()).unwrap();
        let err = server
            .call_tool_by_name("getNothing", serde_json::Map::new())
            .await
            .unwrap_err();
        assert!(err.message.contains("Unknown tool: getNothing"));
    }
}
