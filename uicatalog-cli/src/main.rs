use std::process;
use std::sync::Arc;

mod categories;
mod fetch;

use clap::CommandFactory;
use is_terminal::IsTerminal;
use rmcp::service::RunningService;
use rmcp::transport::io::stdio;
use rmcp::{serve_server, RoleServer};
use tokio_util::sync::CancellationToken;
use uicatalog::{Config, HttpRegistryClient, McpServer, RegistryClient};
use uicatalog_cli::cli::{Cli, Commands};
use uicatalog_cli::error::{handle_cli_result, CliError};
use uicatalog_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use uicatalog_cli::fallback::run_with_fallback;
use uicatalog_cli::logging::FileWriterGuard;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let command = match cli.command.clone() {
        Some(command) => command,
        None if !std::io::stdin().is_terminal() => Commands::Serve,
        None => {
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Failed to print help: {e}");
                process::exit(EXIT_ERROR);
            }
            process::exit(EXIT_SUCCESS);
        }
    };

    init_logging(&cli, command == Commands::Serve);

    let config = Arc::new(Config::new());

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            run_server(config).await
        }
        Commands::Categories { format } => {
            match categories::run_categories_command(&config.categories, format) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    tracing::error!("Categories error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Commands::Fetch { tool } => {
            tracing::info!("Running tool {}", tool);
            handle_cli_result(fetch::run_fetch_command(config, &tool).await)
        }
    };

    process::exit(exit_code);
}

fn init_logging(cli: &Cli, serving: bool) {
    use tracing::Level;

    let is_mcp_mode = serving && !std::io::stdin().is_terminal();

    let log_level = if is_mcp_mode {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    if !is_mcp_mode {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();
        return;
    }

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".uicatalog"))
        .unwrap_or_else(|| std::path::PathBuf::from(".uicatalog"));
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {}", log_dir.display(), e);
    }

    let log_filename =
        std::env::var("UICATALOG_LOG_FILE").unwrap_or_else(|_| "mcp.log".to_string());
    let log_file = log_dir.join(log_filename);

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
    {
        Ok(file) => {
            let shared_file = Arc::new(std::sync::Mutex::new(file));
            tracing_subscriber::fmt()
                .with_writer(move || FileWriterGuard::new(Arc::clone(&shared_file)))
                .with_max_level(log_level)
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(log_level)
                .init();
            tracing::warn!("Failed to open log file {}, using stderr: {}", log_file.display(), e);
        }
    }
}

/// Serve the full tool set, falling back once to the catalog tool alone
async fn run_server(config: Arc<Config>) -> i32 {
    let registry: Arc<dyn RegistryClient> = match HttpRegistryClient::new(Arc::clone(&config)) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to create registry client: {}", e);
            return EXIT_ERROR;
        }
    };

    let start_full = {
        let config = Arc::clone(&config);
        let registry = Arc::clone(&registry);
        async move {
            match McpServer::initialize(config, registry).await {
                Ok(server) => start(server).await,
                Err(e) => Err(CliError::fatal("Failed to initialize MCP server", e)),
            }
        }
    };
    let start_limited = move || async move {
        match McpServer::limited(config, registry) {
            Ok(server) => start(server).await,
            Err(e) => Err(CliError::fatal("Failed to create limited MCP server", e)),
        }
    };

    run_with_fallback(start_full, start_limited, run_until_done).await
}

/// Connect `server` to stdio
async fn start(server: McpServer) -> Result<RunningService<RoleServer, McpServer>, CliError> {
    let running = serve_server(server, stdio())
        .await
        .map_err(|e| CliError::new(format!("MCP server error: {e}"), EXIT_ERROR))?;
    tracing::info!("MCP server started successfully");
    Ok(running)
}

/// Run until the client disconnects or Ctrl-C
async fn run_until_done(running: RunningService<RoleServer, McpServer>) -> Result<(), CliError> {
    let ct = CancellationToken::new();
    let ct_clone = ct.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            ct_clone.cancel();
        }
    });

    tokio::select! {
        quit = running.waiting() => match quit {
            Ok(reason) => tracing::info!("MCP server stopped: {:?}", reason),
            Err(e) => {
                return Err(CliError::new(format!("MCP server task failed: {e}"), EXIT_ERROR));
            }
        },
        _ = ct.cancelled() => {}
    }

    tracing::info!("MCP server exited successfully");
    Ok(())
}
