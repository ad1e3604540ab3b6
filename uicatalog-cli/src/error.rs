//! Error handling for the uicatalog CLI
//!
//! Commands return [`CliResult`]; the error keeps its source chain and the
//! exit code the process should end with.

use crate::exit_codes::{EXIT_ERROR, EXIT_WARNING};
use std::error::Error;
use std::fmt;

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    /// Message shown to the user
    pub message: String,
    /// Process exit code for this failure
    pub exit_code: i32,
    /// Underlying error, if any
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Wrap another error with a context message and exit code
    pub fn with_context<E: Error + Send + Sync + 'static>(
        context: impl Into<String>,
        error: E,
        exit_code: i32,
    ) -> Self {
        Self {
            message: context.into(),
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// A failure that still produced output, exit code 1
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, EXIT_WARNING)
    }

    /// A startup or configuration failure, exit code 2
    pub fn fatal<E: Error + Send + Sync + 'static>(context: impl Into<String>, error: E) -> Self {
        Self::with_context(context, error, EXIT_ERROR)
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            result.push_str(&format!("\n  Caused by: {err}"));
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}
