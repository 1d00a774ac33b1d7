//! Order status tool.

use clerk_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    value_objects::{ToolError, ToolResult},
};
use clerk_domain::{OrderRecord, find_order};

/// Tool name for order lookup
pub const CHECK_ORDER: &str = "check_order";

/// Definition of the check_order tool
pub fn check_order_definition() -> ToolDefinition {
    ToolDefinition::new(
        CHECK_ORDER,
        "Check the status of a specific order. Accepts the order ID with or \
         without the ORD- prefix.",
    )
    .with_string_arg("order_id", "The order ID to look up, e.g. ORD-1042 or 1042")
}

/// Execute a check_order call against the order snapshot
pub fn execute_check_order(orders: &[OrderRecord], call: &ToolCall) -> ToolResult {
    let order_id = match call.require_string("order_id") {
        Ok(id) => id,
        Err(e) => return ToolResult::failure(CHECK_ORDER, ToolError::invalid_argument(e)),
    };

    match find_order(orders, order_id) {
        Some(record) => match serde_json::to_string(record) {
            Ok(json) => ToolResult::success(CHECK_ORDER, json),
            Err(e) => ToolResult::failure(
                CHECK_ORDER,
                ToolError::execution_failed(format!("Error accessing order database: {}", e)),
            ),
        },
        None => ToolResult::success(CHECK_ORDER, "Order ID not found."),
    }
}
