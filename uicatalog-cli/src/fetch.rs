use rmcp::model::{CallToolResult, RawContent};
use std::sync::Arc;
use uicatalog::{Config, HttpRegistryClient, McpServer, RegistryClient};

use uicatalog_cli::error::{CliError, CliResult};
use uicatalog_cli::exit_codes::EXIT_ERROR;

/// Run one tool with a fully initialized server and print its text output
pub async fn run_fetch_command(config: Arc<Config>, tool: &str) -> CliResult<()> {
    let registry: Arc<dyn RegistryClient> = Arc::new(
        HttpRegistryClient::new(Arc::clone(&config))
            .map_err(|e| CliError::fatal("Failed to create registry client", e))?,
    );
    let server = McpServer::initialize(config, registry)
        .await
        .map_err(|e| CliError::fatal("Failed to load the registry", e))?;

    let result = server
        .call_tool_by_name(tool, serde_json::Map::new())
        .await
        .map_err(|e| CliError::new(e.message.to_string(), EXIT_ERROR))?;

    let text = result_text(&result);
    if result.is_error.unwrap_or(false) {
        return Err(CliError::warning(format!("{tool} failed: {text}")));
    }

    println!("{text}");
    Ok(())
}

fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
