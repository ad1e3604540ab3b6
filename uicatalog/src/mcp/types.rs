//! Request types for MCP tools

use schemars::JsonSchema;
use serde::Deserialize;

/// Arguments accepted by the catalog and category tools
///
/// Every tool takes no arguments; extra keys sent by a client are ignored.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoArguments {}

/// JSON schema advertised for argument-less tools
pub fn no_arguments_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(NoArguments))
        .unwrap_or_else(|_| serde_json::json!({ "type": "object", "properties": {} }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_schema_is_an_object() {
        let schema = no_arguments_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema
            .get("required")
            .map_or(true, |required| required.as_array().unwrap().is_empty()));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let parsed = serde_json::from_value::<NoArguments>(serde_json::json!({ "unexpected": true }));
        assert!(parsed.is_ok());
    }
}
