//! Tool domain value objects — immutable result and error types
//!
//! Every tool execution produces a [`ToolResult`]. Failures are carried as
//! [`ToolError`] values with a stable code so the dispatch loop can decide
//! how to report them; none of them ever escape the tool boundary as a
//! propagated error — the dispatcher always receives text.

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing/unknown parameters — the model can correct and retry |
/// | `NOT_FOUND` | Unknown tool name |
/// | `EXECUTION_FAILED` | Unexpected failure during lookup or serialization |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Tool not found: {}", resource.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution.
///
/// `output` is the text handed back to the dispatcher: JSON for structured
/// results, a plain sentence otherwise. A result can be "successful" and
/// still carry a not-found sentence — NoMatch is a normal outcome, not an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error() {
        let err = ToolError::not_found("warp_drive");
        assert_eq!(err.code, "NOT_FOUND");
        assert!(err.message.contains("warp_drive"));
        assert_eq!(err.to_string(), "[NOT_FOUND] Tool not found: warp_drive");
    }

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("check_order", r#"{"order_id": "ORD-1042"}"#);

        assert!(result.is_success());
        assert_eq!(result.output(), Some(r#"{"order_id": "ORD-1042"}"#));
        assert!(result.error().is_none());
    }

    #[test]
    fn test_tool_result_failure() {
        let result = ToolResult::failure(
            "search_products",
            ToolError::invalid_argument("Missing required argument: query"),
        );

        assert!(!result.is_success());
        assert!(result.output().is_none());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }
}
