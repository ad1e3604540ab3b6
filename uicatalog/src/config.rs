//! Configuration management for uicatalog
//!
//! Values are resolved in three layers, later layers overriding earlier ones:
//! 1. Built-in defaults
//! 2. `UICATALOG_*` environment variables
//! 3. A `uicatalog.yaml` file

use crate::categories::{default_categories, Category};
use crate::common::EnvLoader;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://ui.stackzero.co";
const DEFAULT_INSTALL_COMMAND: &str = "npx shadcn@latest add";
const DEFAULT_IMPORT_PREFIX: &str = "@/components/ui";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const CONFIG_FILENAME: &str = "uicatalog.yaml";
const ENV_PREFIX: &str = "UICATALOG";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        /// Path to the configuration file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content from a configuration file
    #[error("Invalid YAML syntax in {path}:\n{source}\n\nHint: Check for proper indentation and YAML formatting")]
    YamlParse {
        /// Path to the configuration file with invalid YAML content
        path: PathBuf,
        /// Underlying YAML parsing error
        #[source]
        source: serde_yaml::Error,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the offending field
        field: String,
        /// The invalid value
        value: String,
        /// How to fix it
        hint: String,
    },
}

/// Runtime configuration for the registry client and tool output
#[derive(Debug, Clone)]
pub struct Config {
    /// Public site of the component registry
    pub base_url: String,
    /// Base URL of registry item documents (`<registry_url>/<name>.json`)
    pub registry_url: String,
    /// URL of the document listing all components
    pub registry_file_url: String,
    /// URL of the document listing all usage examples
    pub examples_file_url: String,
    /// Host that dependency references must point at to count as registry
    /// components. Defaults to the host of `base_url`.
    pub registry_host: Option<String>,
    /// Command shown in install instructions
    pub install_command: String,
    /// Module prefix shown in import statements
    pub import_prefix: String,
    /// Per-request HTTP timeout
    pub request_timeout_secs: u64,
    /// Category table, one tool per entry
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            registry_url: format!("{DEFAULT_BASE_URL}/r"),
            registry_file_url: format!("{DEFAULT_BASE_URL}/registry.json"),
            examples_file_url: format!("{DEFAULT_BASE_URL}/registry-examples.json"),
            registry_host: None,
            install_command: DEFAULT_INSTALL_COMMAND.to_string(),
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Create a configuration from defaults, environment variables and the
    /// first `uicatalog.yaml` found.
    ///
    /// A broken YAML file is reported and skipped rather than failing
    /// startup; call [`Config::validate`] to check the final values.
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env_vars();

        match YamlConfig::load_or_default() {
            Ok(yaml_config) => yaml_config.apply_to_config(&mut config),
            Err(e) => {
                tracing::warn!(
                    "Failed to load YAML configuration, falling back to env vars and defaults: {}",
                    e
                );
            }
        }

        config
    }

    /// Create a configuration from defaults overridden by one YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        YamlConfig::load_from_file(path)?.apply_to_config(&mut config);
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        let loader = EnvLoader::new(ENV_PREFIX);

        loader.apply_string("BASE_URL", &mut self.base_url);
        loader.apply_string("REGISTRY_URL", &mut self.registry_url);
        loader.apply_string("REGISTRY_FILE_URL", &mut self.registry_file_url);
        loader.apply_string("EXAMPLES_FILE_URL", &mut self.examples_file_url);
        if let Some(host) = loader.string("REGISTRY_HOST") {
            self.registry_host = Some(host);
        }
        loader.apply_string("INSTALL_COMMAND", &mut self.install_command);
        loader.apply_string("IMPORT_PREFIX", &mut self.import_prefix);
        loader.apply_parsed("REQUEST_TIMEOUT_SECS", &mut self.request_timeout_secs);
    }

    /// Host used to recognise registry dependency references
    pub fn registry_host(&self) -> Option<String> {
        self.registry_host.clone().or_else(|| {
            url::Url::parse(&self.base_url)
                .ok()
                .and_then(|url| url.host_str().map(str::to_string))
        })
    }

    /// URL of the registry item document for `name`
    pub fn item_url(&self, name: &str) -> String {
        format!("{}/{}.json", self.registry_url.trim_end_matches('/'), name)
    }

    /// Find the `uicatalog.yaml` configuration file
    ///
    /// Search order: current directory, `~/.config/uicatalog/`, then `~`.
    pub fn find_yaml_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILENAME)];

        if let Some(home_dir) = dirs::home_dir() {
            search_paths.push(home_dir.join(".config").join("uicatalog").join(CONFIG_FILENAME));
            search_paths.push(home_dir.join(CONFIG_FILENAME));
        }

        let found = search_paths.into_iter().find(|path| path.is_file());
        match &found {
            Some(path) => tracing::debug!("Found configuration file: {:?}", path),
            None => tracing::debug!("No {} configuration file found", CONFIG_FILENAME),
        }
        found
    }

    /// Validate the current configuration settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("base_url", &self.base_url),
            ("registry_url", &self.registry_url),
            ("registry_file_url", &self.registry_file_url),
            ("examples_file_url", &self.examples_file_url),
        ] {
            if url::Url::parse(value).is_err() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                    hint: "Expected an absolute URL such as https://example.com/r".to_string(),
                });
            }
        }

        match self.registry_host() {
            Some(host) if !host.is_empty() => {}
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "registry_host".to_string(),
                    value: self.registry_host.clone().unwrap_or_default(),
                    hint: "Set registry_host or use a base_url with a host".to_string(),
                })
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                value: "0".to_string(),
                hint: "The request timeout must be at least one second".to_string(),
            });
        }

        let mut tool_names = HashSet::new();
        for category in &self.categories {
            if category.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "categories".to_string(),
                    value: category.components.join(", "),
                    hint: "Every category needs a non-empty name".to_string(),
                });
            }
            if !tool_names.insert(category.tool_name()) {
                return Err(ConfigError::InvalidValue {
                    field: "categories".to_string(),
                    value: category.name.clone(),
                    hint: "Category names must be unique".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// YAML configuration file contents; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    /// See [`Config::base_url`]
    pub base_url: Option<String>,
    /// See [`Config::registry_url`]
    pub registry_url: Option<String>,
    /// See [`Config::registry_file_url`]
    pub registry_file_url: Option<String>,
    /// See [`Config::examples_file_url`]
    pub examples_file_url: Option<String>,
    /// See [`Config::registry_host`]
    pub registry_host: Option<String>,
    /// See [`Config::install_command`]
    pub install_command: Option<String>,
    /// See [`Config::import_prefix`]
    pub import_prefix: Option<String>,
    /// See [`Config::request_timeout_secs`]
    pub request_timeout_secs: Option<u64>,
    /// Replaces the built-in category table when present
    pub categories: Option<Vec<Category>>,
}

impl YamlConfig {
    /// Apply YAML configuration values to an existing Config
    pub fn apply_to_config(self, config: &mut Config) {
        if let Some(value) = self.base_url {
            config.base_url = value;
        }
        if let Some(value) = self.registry_url {
            config.registry_url = value;
        }
        if let Some(value) = self.registry_file_url {
            config.registry_file_url = value;
        }
        if let Some(value) = self.examples_file_url {
            config.examples_file_url = value;
        }
        if let Some(value) = self.registry_host {
            config.registry_host = Some(value);
        }
        if let Some(value) = self.install_command {
            config.install_command = value;
        }
        if let Some(value) = self.import_prefix {
            config.import_prefix = value;
        }
        if let Some(value) = self.request_timeout_secs {
            config.request_timeout_secs = value;
        }
        if let Some(categories) = self.categories {
            config.categories = categories;
        }
    }

    /// Load YAML configuration from a file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!("Loading YAML configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Try to load YAML configuration, returning default if file not found
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Config::find_yaml_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
