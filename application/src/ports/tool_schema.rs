//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize them for
//! the dispatcher API" (infrastructure). The domain layer defines
//! [`ToolDefinition`] and [`ToolSpec`]; this port handles the function-
//! declaration conversion the hosted model requires.

use clerk_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to the dispatcher API format.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to a function declaration.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a declaration array (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
