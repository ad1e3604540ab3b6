//! Unified error handling for the uicatalog library
//!
//! Per-item failures (a single component or example) are expected during
//! normal operation and are recovered by the caller; see
//! [`crate::resolver`] for where those boundaries sit.

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for the uicatalog library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// A registry list or detail fetch failed
    #[error("Failed to fetch {resource}: {reason}")]
    Fetch {
        /// What was being fetched, e.g. `component 'star-rating-basic'`
        resource: String,
        /// Transport, status or decoding failure description
        reason: String,
    },

    /// An assembled record did not conform to the output schema
    #[error("Validation failed for '{name}': {reason}")]
    Validation {
        /// Name of the record that failed validation
        name: String,
        /// Joined schema violations
        reason: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    /// Build a fetch error for the given resource description
    pub fn fetch(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came from the registry rather than local processing
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;
