//! A callable bound to its derived schema.

use crate::error::ToolResult;
use crate::schema::ToolSchema;
use crate::types::{Documentation, Signature};
use crate::validator;
use serde_json::{Map, Value};
use tracing::debug;

/// The stored callable: validated arguments in, result (or the callable's
/// own failure) out.
pub type ToolFn = Box<dyn Fn(&Map<String, Value>) -> ToolResult<Value> + Send + Sync>;

/// One callable together with the schema derived from its signature.
///
/// The schema and the compiled argument validator are built exactly once at
/// construction; both are immutable for the tool's lifetime.
pub struct Tool {
    schema: ToolSchema,
    validator: jsonschema::Validator,
    callable: ToolFn,
}

impl Tool {
    /// Builds a tool from a signature, its documentation, and the callable.
    ///
    /// Fails with the binder's error kinds (missing annotation, missing
    /// description, missing documentation) or `UnsupportedType` from the
    /// mapper; on failure no tool — and no partial schema — exists.
    pub fn new<F>(signature: Signature, documentation: Documentation, callable: F) -> ToolResult<Self>
    where
        F: Fn(&Map<String, Value>) -> ToolResult<Value> + Send + Sync + 'static,
    {
        Self::build(signature, documentation, false, Box::new(callable))
    }

    /// Like [`Tool::new`], but the schema additionally carries a `return`
    /// fragment when the signature declares a return annotation.
    pub fn with_return<F>(
        signature: Signature,
        documentation: Documentation,
        callable: F,
    ) -> ToolResult<Self>
    where
        F: Fn(&Map<String, Value>) -> ToolResult<Value> + Send + Sync + 'static,
    {
        Self::build(signature, documentation, true, Box::new(callable))
    }

    fn build(
        signature: Signature,
        documentation: Documentation,
        include_return: bool,
        callable: ToolFn,
    ) -> ToolResult<Self> {
        let schema = ToolSchema::derive(&signature, &documentation, include_return)?;
        let validator = validator::compile(&schema.parameters_value())?;
        debug!(tool = %schema.name, parameters = schema.parameters.len(), "derived tool schema");
        Ok(Self {
            schema,
            validator,
            callable,
        })
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    /// The immutable schema view.
    pub fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    /// Checks a decoded argument value against this tool's parameter schema
    /// using the validator compiled at construction.
    pub fn validate_args(&self, args: &Value) -> ToolResult<()> {
        validator::check(&self.validator, args)
    }

    /// Applies the stored callable to already-validated arguments and
    /// returns its result verbatim; any failure the callable reports
    /// propagates unwrapped.
    pub fn invoke(&self, args: &Map<String, Value>) -> ToolResult<Value> {
        (self.callable)(args)
    }
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.schema.name)
            .field("parameters", &self.schema.parameters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::types::{Parameter, TypeExpr};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn repeat_signature() -> Signature {
        Signature::new("repeat")
            .with_parameter(Parameter::new("x", TypeExpr::Integer))
            .with_parameter(Parameter::new("y", TypeExpr::String).with_default("hello"))
            .returning(TypeExpr::String)
    }

    fn repeat_documentation() -> Documentation {
        Documentation::new("This is a test function.")
            .with_param("x", "An integer.")
            .with_param("y", "A string.")
    }

    fn repeat_callable(args: &Map<String, Value>) -> ToolResult<Value> {
        let x = args["x"].as_i64().unwrap_or(0) as usize;
        let y = args
            .get("y")
            .and_then(Value::as_str)
            .unwrap_or("hello");
        Ok(json!(y.repeat(x)))
    }

    #[test]
    fn schema_carries_defaults_and_required_list() {
        let tool = Tool::new(repeat_signature(), repeat_documentation(), repeat_callable).unwrap();
        assert_eq!(
            tool.schema().to_value(),
            json!({
                "name": "repeat",
                "description": "This is a test function.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "x": { "type": "integer", "description": "An integer." },
                        "y": {
                            "type": "string",
                            "description": "A string.",
                            "default": "hello"
                        }
                    },
                    "required": ["x"]
                }
            })
        );
    }

    #[test]
    fn with_return_adds_the_return_fragment() {
        let tool =
            Tool::with_return(repeat_signature(), repeat_documentation(), repeat_callable)
                .unwrap();
        assert_eq!(tool.schema().to_value()["return"], json!({ "type": "string" }));
    }

    #[test]
    fn without_return_annotation_no_fragment_is_added() {
        let signature = Signature::new("noop");
        let tool = Tool::with_return(signature, Documentation::new("Does nothing."), |_| {
            Ok(Value::Null)
        })
        .unwrap();
        assert!(tool.schema().to_value().get("return").is_none());
    }

    #[test]
    fn required_list_is_omitted_when_every_parameter_has_a_default() {
        let signature = Signature::new("f")
            .with_parameter(Parameter::new("x", TypeExpr::Integer).with_default(0));
        let tool = Tool::new(
            signature,
            Documentation::new("Docs.").with_param("x", "An x."),
            |_| Ok(Value::Null),
        )
        .unwrap();
        assert!(tool.schema().parameters_value().get("required").is_none());
    }

    #[test]
    fn unsupported_annotation_fails_construction() {
        let signature =
            Signature::new("f").with_parameter(Parameter::new("x", TypeExpr::opaque("complex")));
        let err = Tool::new(
            signature,
            Documentation::new("Docs.").with_param("x", "An x."),
            |_| Ok(Value::Null),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::UnsupportedType { .. }));
    }

    #[test]
    fn schema_derivation_is_idempotent() {
        let build = || {
            Tool::with_return(repeat_signature(), repeat_documentation(), repeat_callable)
                .unwrap()
        };
        let first = serde_json::to_string(&build().schema().to_value()).unwrap();
        let second = serde_json::to_string(&build().schema().to_value()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invoke_applies_the_callable_verbatim() {
        let tool = Tool::new(repeat_signature(), repeat_documentation(), repeat_callable).unwrap();
        let args = match json!({ "x": 3 }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        assert_eq!(tool.invoke(&args).unwrap(), json!("hellohellohello"));
    }

    #[test]
    fn callable_failures_propagate_unwrapped() {
        let signature = Signature::new("f");
        let tool = Tool::new(signature, Documentation::new("Fails."), |_| {
            Err(ToolError::execution_failed("boom"))
        })
        .unwrap();
        let err = tool.invoke(&Map::new()).unwrap_err();
        assert!(matches!(err, ToolError::Execution(ref msg) if msg == "boom"));
    }
}
