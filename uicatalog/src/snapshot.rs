//! Point-in-time view of the registry
//!
//! A snapshot pairs the component list with the dependency index built from
//! the example list. Snapshots are never cached: every tool call loads a
//! fresh one.

use crate::dependency_index::{DependencyIndex, DependencyMatcher};
use crate::error::Result;
use crate::registry::{ComponentSummary, RegistryClient};

/// Component list plus dependency index, loaded together
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    /// Every component in the registry
    pub components: Vec<ComponentSummary>,
    /// Number of examples the index was built from
    pub example_count: usize,
    /// Component → dependent examples
    pub index: DependencyIndex,
}

impl CatalogSnapshot {
    /// Fetch both lists concurrently; fails if either fetch fails
    pub async fn load(registry: &dyn RegistryClient, matcher: &DependencyMatcher) -> Result<Self> {
        let (components, examples) =
            tokio::try_join!(registry.list_components(), registry.list_examples())?;

        Ok(Self {
            index: DependencyIndex::build(&examples, matcher),
            example_count: examples.len(),
            components,
        })
    }

    /// Fetch both lists concurrently, substituting empty data for failures
    ///
    /// A failed component list yields an empty catalog; a failed example
    /// list yields an empty index. Both failures are logged.
    pub async fn load_best_effort(
        registry: &dyn RegistryClient,
        matcher: &DependencyMatcher,
    ) -> Self {
        let (components, examples) =
            tokio::join!(registry.list_components(), registry.list_examples());

        let components = components.unwrap_or_else(|e| {
            tracing::warn!("Continuing with an empty component catalog: {}", e);
            Vec::new()
        });
        let examples = examples.unwrap_or_else(|e| {
            tracing::warn!("Continuing without example links: {}", e);
            Vec::new()
        });

        Self {
            index: DependencyIndex::build(&examples, matcher),
            example_count: examples.len(),
            components,
        }
    }

    /// Look up a component by name
    pub fn component(&self, name: &str) -> Option<&ComponentSummary> {
        self.components.iter().find(|c| c.name == name)
    }
}
