//! Error types for schema construction and tool invocation.

use thiserror::Error;

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors raised while deriving a tool's schema or invoking it
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("unsupported type annotation: {annotation}")]
    UnsupportedType { annotation: String },

    #[error("missing type annotation for parameter '{parameter}'")]
    MissingAnnotation { parameter: String },

    #[error("missing description for parameter '{parameter}'")]
    MissingDescription { parameter: String },

    #[error("missing documentation for callable '{callable}'")]
    MissingDocumentation { callable: String },

    #[error("failed to parse arguments: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("arguments do not conform to schema: {violations}")]
    Validation { violations: String },

    #[error("no tool registered under name: {0}")]
    UnknownTool(String),

    #[error("tool execution failed: {0}")]
    Execution(String),

    #[error("custom error: {0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl ToolError {
    pub fn unsupported_type(annotation: impl Into<String>) -> Self {
        ToolError::UnsupportedType {
            annotation: annotation.into(),
        }
    }

    pub fn missing_annotation(parameter: impl Into<String>) -> Self {
        ToolError::MissingAnnotation {
            parameter: parameter.into(),
        }
    }

    pub fn missing_description(parameter: impl Into<String>) -> Self {
        ToolError::MissingDescription {
            parameter: parameter.into(),
        }
    }

    pub fn missing_documentation(callable: impl Into<String>) -> Self {
        ToolError::MissingDocumentation {
            callable: callable.into(),
        }
    }

    pub fn validation(violations: impl Into<String>) -> Self {
        ToolError::Validation {
            violations: violations.into(),
        }
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        ToolError::UnknownTool(name.into())
    }

    pub fn execution_failed(msg: impl Into<String>) -> Self {
        ToolError::Execution(msg.into())
    }

    pub fn custom(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ToolError::Custom(Box::new(err))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::UnsupportedType { .. } => ErrorKind::Schema,
            ToolError::MissingAnnotation { .. }
            | ToolError::MissingDescription { .. }
            | ToolError::MissingDocumentation { .. } => ErrorKind::Metadata,
            ToolError::Parse(_) => ErrorKind::Parse,
            ToolError::Validation { .. } => ErrorKind::Validation,
            ToolError::UnknownTool(_) => ErrorKind::Unknown,
            ToolError::Execution(_) => ErrorKind::Execution,
            ToolError::Custom(_) => ErrorKind::Other,
        }
    }

    /// True for errors that can only arise while a schema is being derived,
    /// never at call time.
    pub fn is_construction_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Schema | ErrorKind::Metadata)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Schema,
    Metadata,
    Parse,
    Validation,
    Unknown,
    Execution,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_errors_are_classified() {
        assert!(ToolError::unsupported_type("Complex").is_construction_error());
        assert!(ToolError::missing_annotation("x").is_construction_error());
        assert!(ToolError::missing_description("x").is_construction_error());
        assert!(ToolError::missing_documentation("f").is_construction_error());
    }

    #[test]
    fn call_time_errors_are_not_construction_errors() {
        assert!(!ToolError::unknown_tool("f").is_construction_error());
        assert!(!ToolError::validation("bad").is_construction_error());
        assert!(!ToolError::execution_failed("boom").is_construction_error());
        assert_eq!(ToolError::unknown_tool("f").kind(), ErrorKind::Unknown);
    }
}
