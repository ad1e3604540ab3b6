//! Component detail assembly
//!
//! Turns one catalog entry into the self-describing record returned to
//! agents: install instructions, the primary source file behind a
//! disclaimer, and every usage example that depends on the component.

use crate::config::Config;
use crate::dependency_index::DependencyIndex;
use crate::error::Result;
use crate::formatters::format_component_name;
use crate::registry::{ComponentSummary, RegistryClient, RegistryItem};
use crate::schema::OutputSchema;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A usage example linked to a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentExample {
    /// Example registry name
    pub name: String,
    /// Example registry type tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Example description
    pub description: String,
    /// Primary source file of the example
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<RegistryItem> for ComponentExample {
    fn from(item: RegistryItem) -> Self {
        let content = item.primary_content().map(str::to_string);
        Self {
            name: item.name,
            kind: item.kind,
            description: item.description,
            content,
        }
    }
}

/// The record returned for one component of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualComponentDetail {
    /// Component registry name
    pub name: String,
    /// Component registry type tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Component description
    pub description: String,
    /// Install and import instructions
    pub install: String,
    /// Disclaimer followed by the primary source file, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Examples that depend on this component
    pub examples: Vec<ComponentExample>,
}

/// Builds [`IndividualComponentDetail`] records from registry data
pub struct ComponentAssembler {
    registry: Arc<dyn RegistryClient>,
    config: Arc<Config>,
    schema: Arc<OutputSchema>,
}

impl ComponentAssembler {
    /// Create an assembler over a registry client
    pub fn new(
        registry: Arc<dyn RegistryClient>,
        config: Arc<Config>,
        schema: Arc<OutputSchema>,
    ) -> Self {
        Self {
            registry,
            config,
            schema,
        }
    }

    fn import_statement(&self, name: &str) -> String {
        format!(
            "import {{ {} }} from \"{}/{}\";",
            format_component_name(name),
            self.config.import_prefix.trim_end_matches('/'),
            name
        )
    }

    /// Instructions for installing and importing `name`
    pub fn install_instructions(&self, name: &str) -> String {
        format!(
            "You can install the component using the shadcn/ui CLI. For example: {} \"{}\" \
             (Rules: make sure the URL is wrapped in double quotes.) Once installed, you can \
             import the component like this: {}",
            self.config.install_command,
            self.config.item_url(name),
            self.import_statement(name)
        )
    }

    /// Text placed in front of the embedded source of `name`
    pub fn disclaimer(&self, name: &str) -> String {
        format!(
            "The code below is for context only. It helps you understand the component's \
             props, types, and behavior. After installing, the component will be available \
             for import via: {}\n\n",
            self.import_statement(name)
        )
    }

    /// Assemble and validate the record for one catalog entry
    ///
    /// Fails when the component's own detail cannot be fetched or the
    /// record violates the output schema. Examples that fail to fetch are
    /// left out.
    pub async fn assemble(
        &self,
        component: &ComponentSummary,
        index: &DependencyIndex,
    ) -> Result<IndividualComponentDetail> {
        let detail = self.registry.fetch_component(&component.name).await?;
        let content = detail
            .primary_content()
            .map(|source| format!("{}{}", self.disclaimer(&component.name), source));

        let examples = self.linked_examples(&component.name, index).await;

        let record = IndividualComponentDetail {
            name: component.name.clone(),
            kind: component.kind.clone(),
            description: component.description.clone(),
            install: self.install_instructions(&component.name),
            content,
            examples,
        };

        self.schema.validate(&record.name, &record)?;
        Ok(record)
    }

    async fn linked_examples(
        &self,
        component: &str,
        index: &DependencyIndex,
    ) -> Vec<ComponentExample> {
        let names = index.examples_for(component);
        if names.is_empty() {
            return Vec::new();
        }

        let fetches = names.iter().map(|name| self.registry.fetch_example(name));
        join_all(fetches)
            .await
            .into_iter()
            .zip(names)
            .filter_map(|(result, name)| match result {
                Ok(item) => Some(ComponentExample::from(item)),
                Err(e) => {
                    tracing::debug!(
                        "Dropping example '{}' of component '{}': {}",
                        name,
                        component,
                        e
                    );
                    None
                }
            })
            .collect()
    }
}
