//! Argument validation against a tool's generated JSON Schema.
//!
//! Every violation is collected: each missing required field, and each
//! supplied property that fails its property schema. Undeclared arguments
//! are ignored.

use serde_json::{Map, Value};
use tracing::warn;

use super::error::{FieldViolation, ToolError, ToolResult};

/// Validate `args` against `schema`, reporting every failing field.
pub fn validate_arguments(
    tool: &str,
    schema: &Map<String, Value>,
    args: &Map<String, Value>,
) -> ToolResult<()> {
    let violations = collect_violations(schema, args);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ToolError::InvalidArguments {
            tool: tool.to_string(),
            violations,
        })
    }
}

fn collect_violations(schema: &Map<String, Value>, args: &Map<String, Value>) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        .unwrap_or_default();

    for field in &required {
        if args.get(*field).is_none_or(Value::is_null) {
            violations.push(FieldViolation::new(*field, "is required"));
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return violations;
    };

    for (field, property_schema) in properties {
        let Some(value) = args.get(field) else {
            continue;
        };
        if value.is_null() && required.contains(&field.as_str()) {
            continue;
        }

        let validator = match jsonschema::validator_for(property_schema) {
            Ok(validator) => validator,
            Err(e) => {
                warn!(field = %field, error = %e, "Skipping property with uncompilable schema");
                continue;
            }
        };

        violations.extend(
            validator
                .iter_errors(value)
                .map(|e| FieldViolation::new(field.clone(), e.to_string())),
        );
    }

    violations
}
