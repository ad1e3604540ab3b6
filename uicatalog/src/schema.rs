//! Output record schema
//!
//! Every record returned by a category tool is checked against one fixed
//! JSON schema before it leaves the process. A violation is an error for
//! that record, never a silent coercion.

use crate::error::{CatalogError, Result};
use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::{json, Value};

/// The fixed schema for an individual component record
pub fn component_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "IndividualComponent",
        "type": "object",
        "required": ["name", "type", "description", "install", "examples"],
        "properties": {
            "name": { "type": "string" },
            "type": { "type": "string" },
            "description": { "type": "string" },
            "install": { "type": "string" },
            "content": { "type": "string" },
            "examples": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name", "type", "description"],
                    "properties": {
                        "name": { "type": "string" },
                        "type": { "type": "string" },
                        "description": { "type": "string" },
                        "content": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// Compiled validator for [`component_schema`]
pub struct OutputSchema {
    compiled: JSONSchema,
}

impl std::fmt::Debug for OutputSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSchema").finish_non_exhaustive()
    }
}

impl OutputSchema {
    /// Compile the component schema
    pub fn new() -> Result<Self> {
        let schema = component_schema();
        let compiled = JSONSchema::compile(&schema)
            .map_err(|e| CatalogError::Other(format!("compiling output schema: {e}")))?;
        Ok(Self { compiled })
    }

    /// Check a JSON value, returning every violation on failure
    pub fn check(&self, value: &Value) -> std::result::Result<(), Vec<String>> {
        self.compiled.validate(value).map_err(|errors| {
            errors
                .map(|err| {
                    let path = err.instance_path.to_string();
                    if path.is_empty() {
                        err.to_string()
                    } else {
                        format!("{path}: {err}")
                    }
                })
                .collect()
        })
    }

    /// Serialize `record` and validate it, reporting violations against `name`
    pub fn validate<T: Serialize>(&self, name: &str, record: &T) -> Result<Value> {
        let value = serde_json::to_value(record)?;
        self.check(&value).map_err(|violations| CatalogError::Validation {
            name: name.to_string(),
            reason: violations.join("; "),
        })?;
        Ok(value)
    }
}
