//! Component registry access
//!
//! The registry publishes two list documents (components and usage
//! examples) plus one detail document per item. [`RegistryClient`] is the
//! seam the rest of the crate talks to; [`HttpRegistryClient`] is the
//! production implementation and [`MockRegistryClient`] serves fixtures.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub mod http;
pub mod mock;

pub use http::HttpRegistryClient;
pub use mock::MockRegistryClient;

/// One entry of the component list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Unique registry name, e.g. `star-rating-basic`
    pub name: String,
    /// Registry type tag, e.g. `registry:ui`; empty when absent or not a string
    #[serde(rename = "type", default, deserialize_with = "string_or_default")]
    pub kind: String,
    /// Short description; empty when absent or not a string
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    /// Remaining registry fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ComponentSummary {
    /// Create a summary without any extra registry fields
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// One entry of the example list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSummary {
    /// Unique registry name of the example
    pub name: String,
    /// Dependency reference URLs; non-string entries are dropped on decode
    #[serde(
        rename = "registryDependencies",
        default,
        deserialize_with = "string_entries"
    )]
    pub registry_dependencies: Vec<String>,
}

impl ExampleSummary {
    /// Create an example summary
    pub fn new<S: Into<String>>(name: impl Into<String>, dependencies: Vec<S>) -> Self {
        Self {
            name: name.into(),
            registry_dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}

fn string_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(s),
        _ => Ok(String::new()),
    }
}

fn string_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// A file embedded in a registry item document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Path of the file inside the registry project
    #[serde(default)]
    pub path: String,
    /// Source text; absent when the registry only lists the path
    #[serde(default)]
    pub content: Option<String>,
    /// File type tag
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Full detail document for a component or an example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryItem {
    /// Registry name
    pub name: String,
    /// Registry type tag
    #[serde(rename = "type", default, deserialize_with = "string_or_default")]
    pub kind: String,
    /// Short description
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    /// Files making up the item, primary file first
    #[serde(default)]
    pub files: Vec<RegistryFile>,
}

impl RegistryItem {
    /// Content of the first file, if there is one and it carries content
    pub fn primary_content(&self) -> Option<&str> {
        self.files.first().and_then(|file| file.content.as_deref())
    }
}

/// A list document: either a bare array or a registry document with `items`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RegistryListing<T> {
    /// `[ {...}, {...} ]`
    Items(Vec<T>),
    /// `{ "name": "...", "items": [ ... ] }`
    Document {
        /// Listed entries
        items: Vec<T>,
    },
}

impl<T> RegistryListing<T> {
    /// Unwrap the listed entries
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) | Self::Document { items } => items,
        }
    }
}

/// Decode list entries one at a time, skipping and logging the malformed ones
pub(crate) fn decode_entries<T: DeserializeOwned>(
    entries: Vec<serde_json::Value>,
    list: &str,
) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping malformed {} entry #{}: {}", list, position, e);
                None
            }
        })
        .collect()
}

/// Asynchronous access to the component registry
#[async_trait::async_trait]
pub trait RegistryClient: Send + Sync {
    /// The component list exactly as the registry published it
    async fn list_catalog(&self) -> Result<Vec<serde_json::Value>>;

    /// List every well-formed component in the registry
    async fn list_components(&self) -> Result<Vec<ComponentSummary>>;

    /// List every well-formed usage example in the registry
    async fn list_examples(&self) -> Result<Vec<ExampleSummary>>;

    /// Fetch the full detail document of a component
    async fn fetch_component(&self, name: &str) -> Result<RegistryItem>;

    /// Fetch the full detail document of an example
    async fn fetch_example(&self, name: &str) -> Result<RegistryItem>;
}
