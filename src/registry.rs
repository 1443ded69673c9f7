//! Ordered tool collection: registration, schema aggregation, and validated
//! dispatch.

use crate::error::{ToolError, ToolResult};
use crate::schema::{ProviderSchema, ToolSchema};
use crate::tool::Tool;
use crate::types::{ToolArguments, ToolCall, ToolOutput};
use crate::validator;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

/// Ordered registry of tools keyed by name.
///
/// Registration order is preserved; registering under an existing name
/// replaces the prior tool in place (last-write-wins, original position
/// kept). Mutation takes `&mut self` — concurrent registration needs
/// external synchronization, while read-only `schema()`/`invoke()` calls on
/// a collection that is not being mutated are safe to share.
#[derive(Debug, Default)]
pub struct ToolCollection {
    tools: IndexMap<String, Tool>,
}

impl ToolCollection {
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Bulk-populates from a discovery collaborator's ordered tool sequence.
    pub fn with_tools<I>(tools: I) -> Self
    where
        I: IntoIterator<Item = Tool>,
    {
        let mut collection = Self::new();
        for tool in tools {
            collection.add(tool);
        }
        collection
    }

    /// Registers a tool, replacing any prior tool of the same name in place.
    pub fn add(&mut self, tool: Tool) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            debug!(tool = %name, "replaced registered tool");
        } else {
            debug!(tool = %name, "registered tool");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Wire schemas of all member tools, in registration order.
    pub fn schema(&self) -> Vec<Value> {
        self.tools.values().map(|tool| tool.schema().to_value()).collect()
    }

    /// Member schema views, in registration order.
    pub fn schemas(&self) -> impl Iterator<Item = &ToolSchema> {
        self.tools.values().map(Tool::schema)
    }

    /// Provider-shaped schema export for all member tools.
    pub fn export_schemas(&self, provider: Provider) -> Vec<Value> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                match provider {
                    Provider::OpenAI => schema.to_openai_schema(),
                    Provider::Anthropic => schema.to_anthropic_schema(),
                    Provider::Gemini => schema.to_gemini_schema(),
                    Provider::Generic => schema.to_json_schema(),
                }
            })
            .collect()
    }

    /// Looks up a tool by name, validates the arguments against its schema,
    /// and only then invokes it.
    ///
    /// Raw string input is parsed first (`Parse` on malformed JSON); the
    /// decoded value must conform to the tool's parameter schema
    /// (`Validation` otherwise). No argument set ever reaches a callable
    /// without passing validation.
    pub fn invoke(&self, name: &str, args: impl Into<ToolArguments>) -> ToolResult<Value> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        let decoded = match args.into() {
            ToolArguments::Raw(raw) => validator::parse_arguments(&raw)?,
            ToolArguments::Decoded(value) => value,
        };

        tool.validate_args(&decoded)?;
        let Value::Object(ref map) = decoded else {
            // The parameter schema is object-typed, so validation has
            // already rejected anything else.
            return Err(ToolError::validation("arguments must be a JSON object"));
        };

        debug!(tool = %name, "invoking tool");
        let result = tool.invoke(map);
        if let Err(ref e) = result {
            warn!(tool = %name, error = %e, "tool invocation failed");
        }
        result
    }

    /// Runs the validate-then-invoke pipeline for a [`ToolCall`], folding
    /// any failure into a [`ToolOutput::failure`] envelope.
    pub fn dispatch(&self, call: &ToolCall) -> ToolOutput {
        let mut output = match self.invoke(&call.name, call.arguments.clone()) {
            Ok(content) => ToolOutput::success(&call.name, content),
            Err(e) => ToolOutput::failure(&call.name, e.to_string()),
        };
        output.tool_call_id = call.id.clone();
        output
    }
}

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
    Anthropic,
    Gemini,
    Generic,
}
