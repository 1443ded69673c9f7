//! Common types: the annotation language, callable signatures, and call
//! envelopes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Source type annotation for a parameter or return value.
///
/// This is the closed form a calling environment supplies in place of runtime
/// reflection: every recognized shape is a variant, and anything the mapper
/// has no rule for travels as [`TypeExpr::Opaque`] so it can be rejected at
/// schema-construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeExpr {
    Integer,
    Number,
    Boolean,
    String,
    Null,
    /// Nullable wrapper around exactly one non-null alternative.
    Optional(Box<TypeExpr>),
    /// Homogeneous sequence; `None` means the item type was not declared.
    List(Option<Box<TypeExpr>>),
    /// Sequence with set semantics.
    Set(Box<TypeExpr>),
    /// Fixed-arity tuple with per-position types.
    Tuple(Vec<TypeExpr>),
    /// String-keyed mapping; `None` means the value type was not declared.
    Map(Option<Box<TypeExpr>>),
    /// Untagged union of alternatives.
    Union(Vec<TypeExpr>),
    /// A named annotation with no mapping rule.
    Opaque(String),
}

impl TypeExpr {
    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::Optional(Box::new(inner))
    }

    pub fn list(item: TypeExpr) -> Self {
        TypeExpr::List(Some(Box::new(item)))
    }

    pub fn untyped_list() -> Self {
        TypeExpr::List(None)
    }

    pub fn set(item: TypeExpr) -> Self {
        TypeExpr::Set(Box::new(item))
    }

    pub fn tuple<I>(items: I) -> Self
    where
        I: IntoIterator<Item = TypeExpr>,
    {
        TypeExpr::Tuple(items.into_iter().collect())
    }

    pub fn map(value: TypeExpr) -> Self {
        TypeExpr::Map(Some(Box::new(value)))
    }

    pub fn untyped_map() -> Self {
        TypeExpr::Map(None)
    }

    pub fn union<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = TypeExpr>,
    {
        TypeExpr::Union(variants.into_iter().collect())
    }

    pub fn opaque(name: impl Into<String>) -> Self {
        TypeExpr::Opaque(name.into())
    }

    /// Human-readable spelling of the annotation, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TypeExpr::Integer => "integer".to_string(),
            TypeExpr::Number => "number".to_string(),
            TypeExpr::Boolean => "boolean".to_string(),
            TypeExpr::String => "string".to_string(),
            TypeExpr::Null => "null".to_string(),
            TypeExpr::Optional(inner) => format!("optional<{}>", inner.describe()),
            TypeExpr::List(Some(item)) => format!("array<{}>", item.describe()),
            TypeExpr::List(None) => "array".to_string(),
            TypeExpr::Set(item) => format!("set<{}>", item.describe()),
            TypeExpr::Tuple(items) => {
                let inner: Vec<String> = items.iter().map(TypeExpr::describe).collect();
                format!("tuple<{}>", inner.join(", "))
            }
            TypeExpr::Map(Some(value)) => format!("map<string, {}>", value.describe()),
            TypeExpr::Map(None) => "map".to_string(),
            TypeExpr::Union(variants) => {
                let inner: Vec<String> = variants.iter().map(TypeExpr::describe).collect();
                format!("union<{}>", inner.join(", "))
            }
            TypeExpr::Opaque(name) => name.clone(),
        }
    }
}

/// One declared parameter of a callable.
///
/// The annotation is optional so that an undeclared type is representable;
/// the binder rejects it rather than falling back to "any".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub annotation: Option<TypeExpr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, annotation: TypeExpr) -> Self {
        Self {
            name: name.into(),
            annotation: Some(annotation),
            default: None,
        }
    }

    /// A parameter that was declared without a type annotation.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Declared interface of a callable: name, ordered parameters, and an
/// optional return annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub params: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ret: Option<TypeExpr>,
}

impl Signature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            ret: None,
        }
    }

    pub fn with_parameter(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_parameters<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = Parameter>,
    {
        self.params.extend(params);
        self
    }

    pub fn returning(mut self, annotation: TypeExpr) -> Self {
        self.ret = Some(annotation);
        self
    }
}

/// Parsed structured documentation for a callable, supplied by an external
/// collaborator: a short description plus a per-parameter description lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Documentation {
    short: String,
    #[serde(default)]
    params: IndexMap<String, String>,
}

impl Documentation {
    pub fn new(short: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            params: IndexMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.insert(name.into(), description.into());
        self
    }

    pub fn short_description(&self) -> &str {
        &self.short
    }

    pub fn param_description(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Invocation input: either raw encoded JSON or an already-decoded value.
#[derive(Debug, Clone)]
pub enum ToolArguments {
    Raw(String),
    Decoded(Value),
}

impl From<&str> for ToolArguments {
    fn from(raw: &str) -> Self {
        ToolArguments::Raw(raw.to_string())
    }
}

impl From<String> for ToolArguments {
    fn from(raw: String) -> Self {
        ToolArguments::Raw(raw)
    }
}

impl From<Value> for ToolArguments {
    fn from(value: Value) -> Self {
        ToolArguments::Decoded(value)
    }
}

impl From<Map<String, Value>> for ToolArguments {
    fn from(map: Map<String, Value>) -> Self {
        ToolArguments::Decoded(Value::Object(map))
    }
}

/// A tool call from an LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            arguments,
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            arguments,
        }
    }
}

/// Output envelope for a dispatched tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    pub tool_name: String,
    pub content: Value,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolOutput {
    pub fn success(tool_name: impl Into<String>, content: Value) -> Self {
        Self {
            tool_call_id: None,
            tool_name: tool_name.into(),
            content,
            success: true,
            error: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_call_id: None,
            tool_name: tool_name.into(),
            content: Value::Null,
            success: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describe_spells_nested_annotations() {
        let annotation = TypeExpr::list(TypeExpr::map(TypeExpr::Integer));
        assert_eq!(annotation.describe(), "array<map<string, integer>>");
        assert_eq!(TypeExpr::untyped_map().describe(), "map");
        assert_eq!(TypeExpr::opaque("complex").describe(), "complex");
    }

    #[test]
    fn signature_builder_keeps_declaration_order() {
        let sig = Signature::new("f")
            .with_parameter(Parameter::new("x", TypeExpr::Integer))
            .with_parameter(Parameter::new("y", TypeExpr::String).with_default("hello"));
        assert_eq!(sig.params[0].name, "x");
        assert_eq!(sig.params[1].name, "y");
        assert_eq!(sig.params[1].default, Some(json!("hello")));
    }

    #[test]
    fn arguments_convert_from_raw_and_decoded_forms() {
        assert!(matches!(ToolArguments::from("{}"), ToolArguments::Raw(_)));
        assert!(matches!(
            ToolArguments::from(json!({"x": 1})),
            ToolArguments::Decoded(_)
        ));
    }
}
