//! Product search tool.
//!
//! Wraps the domain search in the textual tool contract: matched records go
//! back as a JSON array, everything else as a human sentence.

use clerk_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    value_objects::{ToolError, ToolResult},
};
use clerk_domain::{ProductRecord, SearchOutcome, search_products};

/// Tool name for product search
pub const SEARCH_PRODUCTS: &str = "search_products";

/// Definition of the search_products tool
pub fn search_products_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_PRODUCTS,
        "Search the product catalog for price, stock, and details. \
         Tolerates misheard or partial product names.",
    )
    .with_string_arg("query", "Free-text product query, e.g. a brand or model name")
}

/// Execute a search_products call against the catalog snapshot
pub fn execute_search_products(catalog: &[ProductRecord], call: &ToolCall) -> ToolResult {
    let query = match call.require_string("query") {
        Ok(q) => q,
        Err(e) => return ToolResult::failure(SEARCH_PRODUCTS, ToolError::invalid_argument(e)),
    };

    match search_products(catalog, query) {
        SearchOutcome::Matches(records) => match serde_json::to_string(&records) {
            Ok(json) => ToolResult::success(SEARCH_PRODUCTS, json),
            Err(e) => ToolResult::failure(
                SEARCH_PRODUCTS,
                ToolError::execution_failed(format!("Database access error: {}", e)),
            ),
        },
        SearchOutcome::NoMatch { query } => ToolResult::success(
            SEARCH_PRODUCTS,
            format!("I couldn't find any products matching '{}'.", query),
        ),
        SearchOutcome::EmptyCatalog => ToolResult::success(
            SEARCH_PRODUCTS,
            "The product catalog is currently empty.",
        ),
    }
}
