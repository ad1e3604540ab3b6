//! Mock in-memory registry for testing
//!
//! `MockRegistryClient` serves fixtures from memory and can be told to fail
//! specific fetches, which lets the resolver and server be exercised without
//! a network.
//!
//! ```ignore
//! use uicatalog::registry::{ComponentSummary, MockRegistryClient, RegistryClient};
//!
//! let registry = MockRegistryClient::new()
//!     .with_component(ComponentSummary::new("star-rating-basic", "registry:ui", "Stars"), Some("export {}"))
//!     .failing_component("face-rating-basic");
//! ```

use super::{
    decode_entries, ComponentSummary, ExampleSummary, RegistryClient, RegistryFile, RegistryItem,
};
use crate::error::{CatalogError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Call counters recorded by the mock
#[derive(Debug, Default)]
pub struct MockCallCounts {
    /// `list_catalog` calls
    pub list_catalog: AtomicUsize,
    /// `list_components` calls
    pub list_components: AtomicUsize,
    /// `list_examples` calls
    pub list_examples: AtomicUsize,
    /// `fetch_component` calls
    pub fetch_component: AtomicUsize,
    /// `fetch_example` calls
    pub fetch_example: AtomicUsize,
}

/// In-memory registry implementation
#[derive(Debug, Clone, Default)]
pub struct MockRegistryClient {
    catalog: Vec<serde_json::Value>,
    examples: Vec<serde_json::Value>,
    details: HashMap<String, RegistryItem>,
    failing: HashSet<String>,
    fail_list_components: bool,
    fail_list_examples: bool,
    calls: Arc<MockCallCounts>,
}

impl MockRegistryClient {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component to the list and register its detail document
    ///
    /// `content` becomes the primary file; `None` produces a detail document
    /// without files.
    pub fn with_component(mut self, summary: ComponentSummary, content: Option<&str>) -> Self {
        let detail = RegistryItem {
            name: summary.name.clone(),
            kind: summary.kind.clone(),
            description: summary.description.clone(),
            files: file_list(&summary.name, content),
        };
        self.details.insert(summary.name.clone(), detail);
        self.catalog.push(component_entry(summary));
        self
    }

    /// Add a component to the list without a detail document, so fetching it
    /// fails as if the registry returned 404
    pub fn with_listed_component(mut self, summary: ComponentSummary) -> Self {
        self.catalog.push(component_entry(summary));
        self
    }

    /// Append a raw entry to the component list, exactly as given
    pub fn with_catalog_entry(mut self, entry: serde_json::Value) -> Self {
        self.catalog.push(entry);
        self
    }

    /// Append a raw entry to the example list, exactly as given
    pub fn with_example_entry(mut self, entry: serde_json::Value) -> Self {
        self.examples.push(entry);
        self
    }

    /// Add an example to the list and register its detail document
    pub fn with_example(
        mut self,
        summary: ExampleSummary,
        description: &str,
        content: Option<&str>,
    ) -> Self {
        let detail = RegistryItem {
            name: summary.name.clone(),
            kind: "registry:example".to_string(),
            description: description.to_string(),
            files: file_list(&summary.name, content),
        };
        self.details.insert(summary.name.clone(), detail);
        self.examples.push(serde_json::json!({
            "name": summary.name,
            "registryDependencies": summary.registry_dependencies,
        }));
        self
    }

    /// Register or replace a raw detail document
    pub fn with_detail(mut self, item: RegistryItem) -> Self {
        self.details.insert(item.name.clone(), item);
        self
    }

    /// Make every detail fetch for `name` fail
    pub fn failing_component(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Make every detail fetch for the example `name` fail
    pub fn failing_example(self, name: &str) -> Self {
        self.failing_component(name)
    }

    /// Make `list_catalog` and `list_components` fail
    pub fn failing_component_list(mut self) -> Self {
        self.fail_list_components = true;
        self
    }

    /// Make `list_examples` fail
    pub fn failing_example_list(mut self) -> Self {
        self.fail_list_examples = true;
        self
    }

    /// Counters shared by every clone of this mock
    pub fn calls(&self) -> Arc<MockCallCounts> {
        Arc::clone(&self.calls)
    }

    fn detail(&self, name: &str, resource: String) -> Result<RegistryItem> {
        if self.failing.contains(name) {
            return Err(CatalogError::fetch(resource, "simulated registry failure"));
        }
        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::fetch(resource, "HTTP 404 Not Found"))
    }
}

fn component_entry(summary: ComponentSummary) -> serde_json::Value {
    let mut entry = serde_json::Map::new();
    entry.insert("name".to_string(), summary.name.into());
    entry.insert("type".to_string(), summary.kind.into());
    entry.insert("description".to_string(), summary.description.into());
    entry.extend(summary.extra);
    serde_json::Value::Object(entry)
}

fn file_list(name: &str, content: Option<&str>) -> Vec<RegistryFile> {
    content
        .map(|content| {
            vec![RegistryFile {
                path: format!("registry/{name}.tsx"),
                content: Some(content.to_string()),
                kind: Some("registry:ui".to_string()),
            }]
        })
        .unwrap_or_default()
}

#[async_trait::async_trait]
impl RegistryClient for MockRegistryClient {
    async fn list_catalog(&self) -> Result<Vec<serde_json::Value>> {
        self.calls.list_catalog.fetch_add(1, Ordering::SeqCst);
        if self.fail_list_components {
            return Err(CatalogError::fetch("component list", "simulated registry failure"));
        }
        Ok(self.catalog.clone())
    }

    async fn list_components(&self) -> Result<Vec<ComponentSummary>> {
        self.calls.list_components.fetch_add(1, Ordering::SeqCst);
        if self.fail_list_components {
            return Err(CatalogError::fetch("component list", "simulated registry failure"));
        }
        Ok(decode_entries(self.catalog.clone(), "component list"))
    }

    async fn list_examples(&self) -> Result<Vec<ExampleSummary>> {
        self.calls.list_examples.fetch_add(1, Ordering::SeqCst);
        if self.fail_list_examples {
            return Err(CatalogError::fetch("example list", "simulated registry failure"));
        }
        Ok(decode_entries(self.examples.clone(), "example list"))
    }

    async fn fetch_component(&self, name: &str) -> Result<RegistryItem> {
        self.calls.fetch_component.fetch_add(1, Ordering::SeqCst);
        self.detail(name, format!("component '{name}'"))
    }

    async fn fetch_example(&self, name: &str) -> Result<RegistryItem> {
        self.calls.fetch_example.fetch_add(1, Ordering::SeqCst);
        self.detail(name, format!("example '{name}'"))
    }
}
