use clap::{Parser, Subcommand, ValueEnum};

/// Output formats for listing commands
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formatted table
    Table,
    /// JSON for scripting
    Json,
    /// YAML for scripting
    Yaml,
}

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "uicatalog")]
#[command(version)]
#[command(about = "An MCP server exposing a UI component registry as per-category tools")]
#[command(long_about = "
uicatalog is an MCP (Model Context Protocol) server that turns a shadcn-style
component registry into agent tools: one tool per component category plus a
tool listing the whole catalog. Each category tool returns install
instructions, source code and usage examples for its components.

Example usage:
  uicatalog serve                # Run as MCP server
  uicatalog categories           # Show the category table and tool names
  uicatalog fetch getRatings     # Run one tool and print its JSON
")]
pub struct Cli {
    /// Subcommand; defaults to `serve` when stdin is not a terminal
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run as MCP server over stdio (default when invoked via stdio)
    #[command(long_about = "
Runs uicatalog as an MCP server on stdin/stdout. On startup the server:

- Fetches the component and example lists from the registry
- Registers getUIComponents and one get<Category> tool per category
- Falls back to offering only getUIComponents if the registry is unreachable

Logs are written to ~/.uicatalog/mcp.log (override the file name with
UICATALOG_LOG_FILE) so stdout stays reserved for the protocol.

Example:
  uicatalog serve
  # Or configure it as a stdio server in your MCP client
")]
    Serve,
    /// List the category table and the tools it produces
    #[command(long_about = "
Lists every configured category, the tool name it is served under and the
components it contains, in presentation order.

Output formats:
  table  - Formatted table (default)
  json   - JSON output for scripting
  yaml   - YAML output for scripting

Examples:
  uicatalog categories
  uicatalog categories --format json
")]
    Categories {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Run one tool against the registry and print its output
    #[command(long_about = "
Loads the registry exactly as `serve` does, runs a single tool and prints the
text it returns. Useful for checking what an agent will receive.

Exit codes:
  0 - Tool succeeded
  1 - Tool returned an error result
  2 - Startup failed or the tool does not exist

Examples:
  uicatalog fetch getUIComponents
  uicatalog fetch getRatings
")]
    Fetch {
        /// Tool name, e.g. getRatings
        tool: String,
    },
}

impl Cli {
    /// Parse the process arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from_args(["uicatalog"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_serve() {
        let cli = Cli::try_parse_from_args(["uicatalog", "serve"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
    }

    #[test]
    fn test_cli_categories_format() {
        let cli = Cli::try_parse_from_args(["uicatalog", "categories"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Categories {
                format: OutputFormat::Table
            })
        );

        let cli = Cli::try_parse_from_args(["uicatalog", "categories", "--format", "json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Categories {
                format: OutputFormat::Json
            })
        );
    }

    #[test]
    fn test_cli_fetch_requires_tool() {
        assert!(Cli::try_parse_from_args(["uicatalog", "fetch"]).is_err());

        let cli = Cli::try_parse_from_args(["uicatalog", "--quiet", "fetch", "getRatings"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(
            cli.command,
            Some(Commands::Fetch {
                tool: "getRatings".to_string()
            })
        );
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from_args(["uicatalog", "serve", "--debug"]).unwrap();
        assert!(cli.debug);
    }
}
