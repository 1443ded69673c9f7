//! Type mapping, schema fragments, and provider-specific formats.

use crate::binder::bind_parameters;
use crate::error::{ToolError, ToolResult};
use crate::types::{Documentation, Signature, TypeExpr};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// JSON Schema primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Integer,
    Number,
    Boolean,
    String,
    Null,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::String => "string",
            PrimitiveKind::Null => "null",
        }
    }
}

/// Shape of a value for schema purposes, produced by [`map_type`].
///
/// Every mapped leaf bottoms out in a [`PrimitiveKind`]; `Array`/`Map` with
/// `None` carry an explicitly unresolved item type and render as an
/// accept-anything fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Array { item: Option<Box<TypeDescriptor>> },
    Tuple { items: Vec<TypeDescriptor> },
    UniqueArray { item: Box<TypeDescriptor> },
    Map { value: Option<Box<TypeDescriptor>> },
    Union { variants: Vec<TypeDescriptor> },
    /// Sugar for a two-variant union with null; dropped when rendering.
    Optional(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Serializes the descriptor to its schema fragment.
    ///
    /// A union renders to a bare list: kind names for primitive variants
    /// (so that a primitive-only union stays a valid `type` array) and full
    /// fragments for composite variants.
    pub fn render(&self) -> Value {
        match self {
            TypeDescriptor::Primitive(kind) => json!({ "type": kind.as_str() }),
            TypeDescriptor::Array { item: None } => json!({ "type": "array", "items": {} }),
            TypeDescriptor::Array { item: Some(item) } => {
                json!({ "type": "array", "items": item.schema_value() })
            }
            TypeDescriptor::Tuple { items } => {
                let fragments: Vec<Value> = items.iter().map(TypeDescriptor::schema_value).collect();
                json!({ "type": "array", "items": fragments })
            }
            TypeDescriptor::UniqueArray { item } => {
                json!({ "type": "array", "uniqueItems": true, "items": item.schema_value() })
            }
            TypeDescriptor::Map { value: None } => {
                json!({ "type": "object", "additionalProperties": {} })
            }
            TypeDescriptor::Map { value: Some(value) } => {
                json!({ "type": "object", "additionalProperties": value.schema_value() })
            }
            TypeDescriptor::Union { variants } => Value::Array(
                variants
                    .iter()
                    .map(|variant| match variant {
                        TypeDescriptor::Primitive(kind) => json!(kind.as_str()),
                        other => other.schema_value(),
                    })
                    .collect(),
            ),
            TypeDescriptor::Optional(inner) => inner.render(),
        }
    }

    /// Rendering for positions that require a schema object (`items`,
    /// `additionalProperties`, a parameter's own fragment). A bare union
    /// list is carried under the `type` keyword.
    pub fn schema_value(&self) -> Value {
        match self.render() {
            Value::Object(map) => Value::Object(map),
            other => json!({ "type": other }),
        }
    }
}

/// Maps a source type annotation to its [`TypeDescriptor`].
///
/// Pure and deterministic. An annotation with no mapping rule fails with
/// [`ToolError::UnsupportedType`] here, at schema-construction time — there
/// is no fallback to "any".
pub fn map_type(annotation: &TypeExpr) -> ToolResult<TypeDescriptor> {
    match annotation {
        TypeExpr::Integer => Ok(TypeDescriptor::Primitive(PrimitiveKind::Integer)),
        TypeExpr::Number => Ok(TypeDescriptor::Primitive(PrimitiveKind::Number)),
        TypeExpr::Boolean => Ok(TypeDescriptor::Primitive(PrimitiveKind::Boolean)),
        TypeExpr::String => Ok(TypeDescriptor::Primitive(PrimitiveKind::String)),
        TypeExpr::Null => Ok(TypeDescriptor::Primitive(PrimitiveKind::Null)),
        // Optionality is expressed via `required`, not via the fragment.
        TypeExpr::Optional(inner) => map_type(inner),
        TypeExpr::List(None) => Ok(TypeDescriptor::Array { item: None }),
        TypeExpr::List(Some(item)) => Ok(TypeDescriptor::Array {
            item: Some(Box::new(map_type(item)?)),
        }),
        TypeExpr::Set(item) => Ok(TypeDescriptor::UniqueArray {
            item: Box::new(map_type(item)?),
        }),
        TypeExpr::Tuple(items) => {
            let items = items.iter().map(map_type).collect::<ToolResult<Vec<_>>>()?;
            Ok(TypeDescriptor::Tuple { items })
        }
        TypeExpr::Map(None) => Ok(TypeDescriptor::Map { value: None }),
        TypeExpr::Map(Some(value)) => Ok(TypeDescriptor::Map {
            value: Some(Box::new(map_type(value)?)),
        }),
        TypeExpr::Union(variants) => map_union(variants),
        TypeExpr::Opaque(_) => Err(ToolError::unsupported_type(annotation.describe())),
    }
}

fn map_union(variants: &[TypeExpr]) -> ToolResult<TypeDescriptor> {
    // Optional sugar: exactly two alternatives, one of them null.
    if let [a, b] = variants {
        match (a, b) {
            (TypeExpr::Null, other) | (other, TypeExpr::Null) => return map_type(other),
            _ => {}
        }
    }
    match variants {
        [] => Err(ToolError::unsupported_type("union<>")),
        [single] => map_type(single),
        _ => {
            let mapped = variants.iter().map(map_type).collect::<ToolResult<Vec<_>>>()?;
            Ok(TypeDescriptor::Union { variants: mapped })
        }
    }
}

/// One bound parameter: descriptor, description, requiredness, and default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParameterSpec {
    /// The parameter's wire fragment: the rendered type with the description
    /// and, when present, the default attached to the fragment itself.
    pub fn fragment(&self) -> Value {
        let mut fragment = match self.descriptor.render() {
            Value::Object(map) => map,
            bare_union => {
                let mut map = Map::new();
                map.insert("type".to_string(), bare_union);
                map
            }
        };
        fragment.insert("description".to_string(), json!(self.description));
        if let Some(default) = &self.default {
            fragment.insert("default".to_string(), default.clone());
        }
        Value::Object(fragment)
    }
}

/// Derived schema of one tool: name, description, ordered parameters, and an
/// optional return descriptor. Built once from a signature plus its
/// documentation, never hand-edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ret: Option<TypeDescriptor>,
}

impl ToolSchema {
    /// Derives the schema for `signature`, failing on any missing annotation,
    /// missing description, or unmappable type. Never yields a partial
    /// schema.
    pub fn derive(
        signature: &Signature,
        documentation: &Documentation,
        include_return: bool,
    ) -> ToolResult<Self> {
        let parameters = bind_parameters(signature, documentation)?;
        let ret = if include_return {
            signature.ret.as_ref().map(map_type).transpose()?
        } else {
            None
        };
        Ok(Self {
            name: signature.name.clone(),
            description: documentation.short_description().to_string(),
            parameters,
            ret,
        })
    }

    /// The `parameters` wire object: `{"type": "object", "properties": ...}`
    /// with `required` attached only when non-empty. Property order is
    /// declaration order.
    pub fn parameters_value(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in &self.parameters {
            properties.insert(param.name.clone(), param.fragment());
            if param.required {
                required.push(json!(param.name));
            }
        }

        let mut object = Map::new();
        object.insert("type".to_string(), json!("object"));
        object.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            object.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(object)
    }

    /// The full wire object: `{name, description, parameters, return?}`.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("name".to_string(), json!(self.name));
        object.insert("description".to_string(), json!(self.description));
        object.insert("parameters".to_string(), self.parameters_value());
        if let Some(ret) = &self.ret {
            object.insert("return".to_string(), ret.render());
        }
        Value::Object(object)
    }
}

/// Provider-specific schema formats
pub trait ProviderSchema {
    fn to_openai_schema(&self) -> Value;
    fn to_anthropic_schema(&self) -> Value;
    fn to_gemini_schema(&self) -> Value;
    fn to_json_schema(&self) -> Value;
}

impl ProviderSchema for ToolSchema {
    fn to_openai_schema(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_value(),
            }
        })
    }

    fn to_anthropic_schema(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_value(),
        })
    }

    fn to_gemini_schema(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters_value(),
        })
    }

    fn to_json_schema(&self) -> Value {
        self.to_value()
    }
}
