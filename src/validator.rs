//! Argument parsing and JSON-Schema conformance checking.

use crate::error::{ToolError, ToolResult};
use serde_json::Value;

/// Decodes a raw UTF-8 JSON argument payload.
///
/// Malformed input fails with [`ToolError::Parse`]; a well-formed payload of
/// the wrong shape (e.g. a bare number) is left for validation to reject.
pub fn parse_arguments(raw: &str) -> ToolResult<Value> {
    Ok(serde_json::from_str(raw)?)
}

/// Compiles a generated parameter schema for repeated validation.
pub(crate) fn compile(schema: &Value) -> ToolResult<jsonschema::Validator> {
    jsonschema::Validator::new(schema)
        .map_err(|e| ToolError::unsupported_type(format!("generated schema rejected: {e}")))
}

pub(crate) fn check(validator: &jsonschema::Validator, args: &Value) -> ToolResult<()> {
    if validator.is_valid(args) {
        return Ok(());
    }
    let violations: Vec<String> = validator.iter_errors(args).map(|e| e.to_string()).collect();
    Err(ToolError::validation(violations.join("; ")))
}

/// Validates a decoded argument value against a JSON Schema.
///
/// Returns `Ok(())` when the value conforms, or [`ToolError::Validation`]
/// naming every violated constraint.
pub fn validate_against_schema(args: &Value, schema: &Value) -> ToolResult<()> {
    let validator = compile(schema)?;
    check(&validator, args)
}
