//! Environment variable loading utilities

use std::env;
use std::str::FromStr;

/// Loads environment variables that share a common prefix
///
/// `EnvLoader::new("UICATALOG").string("REGISTRY_URL")` reads
/// `UICATALOG_REGISTRY_URL`.
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a non-empty string value
    pub fn string(&self, suffix: &str) -> Option<String> {
        env::var(self.key(suffix))
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Load and parse a value, ignoring values that fail to parse
    pub fn parsed<T: FromStr>(&self, suffix: &str) -> Option<T> {
        let raw = self.string(suffix)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring unparsable value for {}: {}", self.key(suffix), raw);
                None
            }
        }
    }

    /// Overwrite `target` when the variable is set
    pub fn apply_string(&self, suffix: &str, target: &mut String) {
        if let Some(value) = self.string(suffix) {
            *target = value;
        }
    }

    /// Overwrite `target` when the variable is set and parses
    pub fn apply_parsed<T: FromStr>(&self, suffix: &str, target: &mut T) {
        if let Some(value) = self.parsed(suffix) {
            *target = value;
        }
    }
}
