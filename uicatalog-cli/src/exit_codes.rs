//! Exit code constants for CLI commands
//!
//! - 0: Success
//! - 1: A tool reported an error, or the server only ran in limited mode
//! - 2: Configuration errors or startup failures

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Tool error or degraded run
pub const EXIT_WARNING: i32 = 1;

/// Configuration errors or critical failures
pub const EXIT_ERROR: i32 = 2;
