//! # tool-bind
//!
//! **Schema-first function calling for LLM applications.**
//!
//! tool-bind turns ordinary callables into LLM-invocable tools by deriving a
//! JSON Schema from each callable's declared signature and structured
//! documentation, then gating every external invocation behind validation
//! against that schema.
//!
//! ## Features
//! - Recursive type mapping: primitives, arrays, sets, tuples, string-keyed
//!   maps, unions, and optionals
//! - Strict construction: a missing annotation, missing description, or
//!   unmappable type fails loudly before a schema ever exists
//! - Validate-then-invoke: no argument set reaches a callable without
//!   passing JSON-Schema validation first
//! - Ordered collections with last-write-wins replacement
//! - Multi-provider schema export (OpenAI, Anthropic, Gemini)
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tool_bind::prelude::*;
//!
//! let signature = Signature::new("repeat")
//!     .with_parameter(Parameter::new("x", TypeExpr::Integer))
//!     .with_parameter(Parameter::new("y", TypeExpr::String).with_default("hello"));
//! let documentation = Documentation::new("Repeats a string.")
//!     .with_param("x", "Repetition count.")
//!     .with_param("y", "The string to repeat.");
//!
//! let tool = Tool::new(signature, documentation, |args| {
//!     let x = args["x"].as_i64().unwrap_or(0) as usize;
//!     let y = args.get("y").and_then(|v| v.as_str()).unwrap_or("hello");
//!     Ok(json!(y.repeat(x)))
//! })?;
//!
//! let mut tools = ToolCollection::new();
//! tools.add(tool);
//!
//! assert_eq!(tools.invoke("repeat", json!({"x": 2}))?, json!("hellohello"));
//! assert!(tools.invoke("repeat", json!({"x": "two"})).is_err());
//! # Ok::<(), tool_bind::ToolError>(())
//! ```

pub mod binder;
pub mod error;
pub mod registry;
pub mod schema;
pub mod tool;
pub mod types;
pub mod validator;

// Re-export commonly used items
pub use binder::bind_parameters;
pub use error::{ErrorKind, ToolError, ToolResult};
pub use registry::{Provider, ToolCollection};
pub use schema::{map_type, ParameterSpec, PrimitiveKind, ProviderSchema, ToolSchema, TypeDescriptor};
pub use tool::{Tool, ToolFn};
pub use types::{
    Documentation, Parameter, Signature, ToolArguments, ToolCall, ToolOutput, TypeExpr,
};
pub use validator::{parse_arguments, validate_against_schema};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorKind, ToolError, ToolResult};
    pub use crate::registry::{Provider, ToolCollection};
    pub use crate::schema::{ProviderSchema, ToolSchema, TypeDescriptor};
    pub use crate::tool::Tool;
    pub use crate::types::{
        Documentation, Parameter, Signature, ToolArguments, ToolCall, ToolOutput, TypeExpr,
    };
}
