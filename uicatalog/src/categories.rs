//! Category table
//!
//! A category is a named, ordered group of registry component names. Each
//! category becomes one `get<Category>` tool on the MCP server, and the
//! declared order of its components is the order results are returned in.

use serde::{Deserialize, Serialize};

/// Prefix shared by all generated category tool names
pub const CATEGORY_TOOL_PREFIX: &str = "get";

/// A named, ordered group of component names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name as it appears in the tool name, e.g. `Ratings`
    pub name: String,
    /// Registry component names in presentation order
    #[serde(default)]
    pub components: Vec<String>,
}

impl Category {
    /// Create a category from a name and its component names
    pub fn new<S: Into<String>>(name: impl Into<String>, components: Vec<S>) -> Self {
        Self {
            name: name.into(),
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the MCP tool serving this category
    pub fn tool_name(&self) -> String {
        format!("{CATEGORY_TOOL_PREFIX}{}", self.name)
    }

    /// Human readable tool description listing the member components
    pub fn tool_description(&self) -> String {
        format!(
            "Provides implementation details for {} components.",
            self.components.join(", ")
        )
    }
}

/// The built-in category table used when no configuration overrides it
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(
            "Ratings",
            vec![
                "star-rating-basic",
                "star-rating-fractions",
                "upvote-rating-basic",
                "upvote-rating-animated",
                "face-rating-basic",
                "face-rating-gradient",
            ],
        ),
        Category::new(
            "AnotherSampleCategory",
            vec!["another-component-basic", "another-component-advanced"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_uses_category_name_verbatim() {
        let category = Category::new("Ratings", vec!["star-rating-basic"]);
        assert_eq!(category.tool_name(), "getRatings");
    }

    #[test]
    fn test_tool_description_lists_components_in_order() {
        let category = Category::new("Ratings", vec!["star-rating-basic", "face-rating-basic"]);
        assert_eq!(
            category.tool_description(),
            "Provides implementation details for star-rating-basic, face-rating-basic components."
        );
    }

    #[test]
    fn test_default_categories() {
        let categories = default_categories();
        assert_eq!(categories[0].name, "Ratings");
        assert_eq!(categories[0].components.len(), 6);
        assert_eq!(categories[0].components[0], "star-rating-basic");

        let tool_names: std::collections::HashSet<_> =
            categories.iter().map(Category::tool_name).collect();
        assert_eq!(tool_names.len(), categories.len());
    }

    #[test]
    fn test_sample_category_tool_name() {
        let tool_names: Vec<_> = default_categories().iter().map(Category::tool_name).collect();
        assert!(tool_names.contains(&"getAnotherSampleCategory".to_string()));
        assert!(!tool_names.contains(&"getAnotherSampleCateogory".to_string()));

        let legacy = Category::new("AnotherSampleCateogory", vec!["button-basic"]);
        assert_eq!(legacy.tool_name(), "getAnotherSampleCateogory");
    }

    #[test]
    fn test_category_deserializes_without_components() {
        let category: Category = serde_yaml::from_str("name: Empty").unwrap();
        assert!(category.components.is_empty());
    }
}
