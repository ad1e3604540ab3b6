//! Category resolution
//!
//! Resolving a category is best effort. Names missing from the catalog are
//! skipped, and a component that fails to assemble is logged and dropped;
//! the remaining components are still returned, in declared order.

use crate::assembler::{ComponentAssembler, IndividualComponentDetail};
use crate::dependency_index::DependencyIndex;
use crate::error::CatalogError;
use crate::registry::ComponentSummary;
use std::collections::HashMap;

/// Everything that happened while resolving one category
#[derive(Debug, Default)]
pub struct CategoryOutcome {
    /// Assembled records, in the category's declared order
    pub resolved: Vec<IndividualComponentDetail>,
    /// Components that failed to assemble
    pub failures: Vec<(String, CatalogError)>,
    /// Names that are not in the catalog
    pub skipped: Vec<String>,
}

/// Maps a category's component names to assembled records
pub struct CategoryResolver {
    assembler: ComponentAssembler,
}

impl CategoryResolver {
    /// Create a resolver around an assembler
    pub fn new(assembler: ComponentAssembler) -> Self {
        Self { assembler }
    }

    /// The assembler used for each component
    pub fn assembler(&self) -> &ComponentAssembler {
        &self.assembler
    }

    /// Resolve `names` against `catalog`, one component at a time
    pub async fn resolve(
        &self,
        category: &str,
        names: &[String],
        catalog: &[ComponentSummary],
        index: &DependencyIndex,
    ) -> CategoryOutcome {
        let by_name: HashMap<&str, &ComponentSummary> =
            catalog.iter().map(|c| (c.name.as_str(), c)).collect();

        let mut outcome = CategoryOutcome::default();
        let mut attempts = Vec::with_capacity(names.len());
        for name in names {
            match by_name.get(name.as_str()) {
                Some(component) => {
                    attempts.push((name, self.assembler.assemble(component, index).await))
                }
                None => {
                    tracing::debug!("Component '{}' of {} is not in the catalog", name, category);
                    outcome.skipped.push(name.clone());
                }
            }
        }

        for (name, attempt) in attempts {
            match attempt {
                Ok(record) => outcome.resolved.push(record),
                Err(e) => {
                    tracing::warn!(
                        "Error processing component {} in category {}: {}",
                        name,
                        category,
                        e
                    );
                    outcome.failures.push((name.clone(), e));
                }
            }
        }

        tracing::debug!(
            "Resolved {}: {} ok, {} failed, {} skipped",
            category,
            outcome.resolved.len(),
            outcome.failures.len(),
            outcome.skipped.len()
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dependency_index::DependencyMatcher;
    use crate::registry::{ExampleSummary, MockRegistryClient, RegistryClient};
    use crate::schema::OutputSchema;
    use std::sync::Arc;

    fn resolver(registry: MockRegistryClient) -> CategoryResolver {
        CategoryResolver::new(ComponentAssembler::new(
            Arc::new(registry),
            Arc::new(Config::default()),
            Arc::new(OutputSchema::new().unwrap()),
        ))
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn summary(name: &str) -> ComponentSummary {
        ComponentSummary::new(name, "registry:ui", format!("{name} description"))
    }

    #[tokio::test]
    async fn test_concrete_scenario() {
        let example = ExampleSummary::new("ex1", vec!["https://ui.stackzero.co/r/star-rating-basic"]);
        let registry = MockRegistryClient::new()
            .with_component(ComponentSummary::new("star-rating-basic", "component", "d"), Some("x"))
            .with_example(example.clone(), "demo", Some("<Demo />"));
        let catalog = registry.list_components().await.unwrap();
        let index = DependencyIndex::build(&[example], &DependencyMatcher::new("ui.stackzero.co"));

        let outcome = resolver(registry)
            .resolve("Ratings", &names(&["star-rating-basic"]), &catalog, &index)
            .await;

        assert_eq!(outcome.resolved.len(), 1);
        assert_eq!(outcome.resolved[0].examples.len(), 1);
        assert_eq!(outcome.resolved[0].examples[0].name, "ex1");
    }

    #[tokio::test]
    async fn test_missing_component_with_empty_catalog() {
        let outcome = resolver(MockRegistryClient::new())
            .resolve("Ratings", &names(&["missing-component"]), &[], &DependencyIndex::default())
            .await;

        assert!(outcome.resolved.is_empty());
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.skipped, names(&["missing-component"]));
    }

    #[tokio::test]
    async fn test_unknown_names_skipped_and_order_preserved() {
        let registry = MockRegistryClient::new()
            .with_component(summary("a"), Some("a"))
            .with_component(summary("b"), Some("b"))
            .with_component(summary("c"), None);
        let catalog = registry.list_components().await.unwrap();

        let outcome = resolver(registry)
            .resolve(
                "Letters",
                &names(&["c", "ghost", "a", "b"]),
                &catalog,
                &DependencyIndex::default(),
            )
            .await;

        let resolved: Vec<_> = outcome.resolved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(resolved, ["c", "a", "b"]);
        assert_eq!(outcome.skipped, names(&["ghost"]));
    }

    #[tokio::test]
    async fn test_failure_does_not_short_circuit() {
        let registry = MockRegistryClient::new()
            .with_component(summary("first"), Some("1"))
            .with_component(summary("broken"), Some("2"))
            .with_listed_component(summary("unpublished"))
            .with_component(summary("last"), Some("3"))
            .failing_component("broken");
        let catalog = registry.list_components().await.unwrap();
        let calls = registry.calls();

        let outcome = resolver(registry)
            .resolve(
                "Mixed",
                &names(&["first", "broken", "unpublished", "last"]),
                &catalog,
                &DependencyIndex::default(),
            )
            .await;

        let resolved: Vec<_> = outcome.resolved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(resolved, ["first", "last"]);

        let failed: Vec<_> = outcome.failures.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(failed, ["broken", "unpublished"]);
        assert!(outcome.failures.iter().all(|(_, e)| e.is_fetch()));
        assert_eq!(calls.fetch_component.load(std::sync::atomic::Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_every_record_conforms_to_schema() {
        let registry = MockRegistryClient::new()
            .with_component(summary("a"), Some("a"))
            .with_component(summary("b"), None);
        let catalog = registry.list_components().await.unwrap();

        let outcome = resolver(registry)
            .resolve("Letters", &names(&["a", "b"]), &catalog, &DependencyIndex::default())
            .await;

        let schema = OutputSchema::new().unwrap();
        let text = serde_json::to_string_pretty(&outcome.resolved).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        for record in parsed.as_array().unwrap() {
            assert!(schema.check(record).is_ok());
        }
    }
}
