//! Store policy (FAQ) tool.

use clerk_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    value_objects::{ToolError, ToolResult},
};
use clerk_domain::{FaqRecord, find_policy_answer};

/// Tool name for policy lookup
pub const GET_POLICY_ANSWER: &str = "get_policy_answer";

/// Apology returned when no FAQ question contains the query.
///
/// A fixed sentence rather than an empty value: the dispatcher needs
/// something speakable to relay either way.
pub const POLICY_NOT_FOUND: &str = "I couldn't find a specific policy regarding that.";

/// Definition of the get_policy_answer tool
pub fn get_policy_answer_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_POLICY_ANSWER,
        "Look up store policies and FAQs, e.g. refunds, shipping, warranty.",
    )
    .with_string_arg("query", "Keyword or phrase from the policy question")
}

/// Execute a get_policy_answer call against the FAQ snapshot
pub fn execute_get_policy_answer(faqs: &[FaqRecord], call: &ToolCall) -> ToolResult {
    let query = match call.require_string("query") {
        Ok(q) => q,
        Err(e) => return ToolResult::failure(GET_POLICY_ANSWER, ToolError::invalid_argument(e)),
    };

    match find_policy_answer(faqs, query) {
        Some(answer) => ToolResult::success(GET_POLICY_ANSWER, answer),
        None => ToolResult::success(GET_POLICY_ANSWER, POLICY_NOT_FOUND),
    }
}
