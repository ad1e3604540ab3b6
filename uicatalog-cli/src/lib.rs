//! uicatalog CLI library
//!
//! Command-line definitions, exit codes, error plumbing, the startup
//! fallback and the logging writer, exposed for the binary and its tests.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// CLI error type carrying an exit code
pub mod error;
/// Limited-mode fallback around server startup
pub mod fallback;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Log writers for MCP mode
pub mod logging;
