//! Example → component dependency index
//!
//! Examples declare the components they use as registry URLs of the form
//! `https://<registry-host>/r/<component-name>`. The index inverts those
//! declarations so each component can list the examples that use it. Only
//! one hop is followed; dependencies of dependencies are not resolved.

use crate::registry::ExampleSummary;
use std::collections::HashMap;
use url::Url;

const REGISTRY_PATH_SEGMENT: &str = "r";
const ITEM_SUFFIX: &str = ".json";

/// Recognises dependency references that point at the registry itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyMatcher {
    host: String,
}

impl DependencyMatcher {
    /// Match references whose host equals `host` (case-insensitive)
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().to_ascii_lowercase(),
        }
    }

    /// The host references must point at
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Extract the component name a reference points at
    ///
    /// Returns `None` for anything that is not an absolute URL on the
    /// registry host ending in `/r/<name>`. A trailing `.json` on the name
    /// is dropped so item-document URLs resolve to the same component.
    pub fn component_name(&self, reference: &str) -> Option<String> {
        let url = Url::parse(reference.trim()).ok()?;
        if url.host_str()? != self.host {
            return None;
        }

        let segments: Vec<&str> = url.path_segments()?.collect();
        let [.., parent, last] = segments.as_slice() else {
            return None;
        };
        if *parent != REGISTRY_PATH_SEGMENT {
            return None;
        }

        let name = last.strip_suffix(ITEM_SUFFIX).unwrap_or(last);
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// Mapping from component name to the examples that depend on it
///
/// Example names keep first-seen order and appear at most once per
/// component. A component only has an entry if some example references it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    entries: HashMap<String, Vec<String>>,
}

impl DependencyIndex {
    /// Build the index from the full example list
    pub fn build(examples: &[ExampleSummary], matcher: &DependencyMatcher) -> Self {
        let mut index = Self::default();
        for example in examples {
            for reference in &example.registry_dependencies {
                match matcher.component_name(reference) {
                    Some(component) => index.insert(component, &example.name),
                    None => tracing::trace!(
                        "Ignoring dependency '{}' of example '{}'",
                        reference,
                        example.name
                    ),
                }
            }
        }
        tracing::debug!(
            "Built dependency index: {} components referenced by {} examples",
            index.len(),
            examples.len()
        );
        index
    }

    fn insert(&mut self, component: String, example: &str) {
        let linked = self.entries.entry(component).or_default();
        if !linked.iter().any(|existing| existing == example) {
            linked.push(example.to_string());
        }
    }

    /// Examples depending on `component`, in first-seen order
    pub fn examples_for(&self, component: &str) -> &[String] {
        self.entries
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether any example references `component`
    pub fn contains(&self, component: &str) -> bool {
        self.entries.contains_key(component)
    }

    /// Referenced component names, in no particular order
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of referenced components
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no example references any component
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
