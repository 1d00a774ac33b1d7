//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of a tool the dispatcher may invoke
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "search_products")
    pub name: String,
    /// Human-readable description, surfaced to the dispatcher for routing
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Convenience for the dominant shape here: one required string argument
    pub fn with_string_arg(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.with_parameter(ToolParameter::new(name, description, true))
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Registry of the tools available to the dispatcher.
///
/// Built explicitly at startup and handed to the dispatcher integration;
/// resolver signatures (name, single string parameter, text return) must
/// not change without updating the registration.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, serde_json::Value>,
    /// Provider-assigned call ID, present when the call came through a
    /// native tool-use API (used to correlate results)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_id: Option<String>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
            native_id: None,
        }
    }

    /// Build a call from a native tool-use block (API-assigned ID)
    pub fn from_native(
        id: impl Into<String>,
        name: impl Into<String>,
        input: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            tool_name: name.into(),
            arguments: input,
            native_id: Some(id.into()),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("search_products", "Fuzzy product search")
            .with_string_arg("query", "Free-text product query");

        assert_eq!(tool.name, "search_products");
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameters[0].name, "query");
        assert!(tool.parameters[0].required);
        assert_eq!(tool.parameters[0].param_type, "string");
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("search_products", "Product search"))
            .register(ToolDefinition::new("check_order", "Order status"));

        assert_eq!(spec.len(), 2);
        assert!(spec.get("search_products").is_some());
        assert!(spec.get("check_order").is_some());
        assert!(spec.get("unknown").is_none());
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("check_order").with_arg("order_id", "ORD-1042");

        assert_eq!(call.tool_name, "check_order");
        assert_eq!(call.get_string("order_id"), Some("ORD-1042"));
        assert_eq!(call.require_string("order_id").unwrap(), "ORD-1042");
        assert!(call.require_string("missing").is_err());
        assert!(call.native_id.is_none());
    }

    #[test]
    fn test_tool_call_from_native() {
        let input: HashMap<String, serde_json::Value> =
            [("query".to_string(), serde_json::json!("sony"))]
                .into_iter()
                .collect();
        let call = ToolCall::from_native("call_7", "search_products", input);

        assert_eq!(call.native_id.as_deref(), Some("call_7"));
        assert_eq!(call.get_string("query"), Some("sony"));
    }
}
