//! Lookup tool provider
//!
//! Wraps the three resolver tools as a [`ToolProvider`] over the loaded
//! [`DataStores`] snapshot. Calls are validated against their definitions
//! before execution so malformed dispatcher requests come back as
//! `INVALID_ARGUMENT` tool failures rather than panics.

use async_trait::async_trait;
use clerk_domain::tool::{
    DefaultToolValidator, ToolValidator,
    entities::{ToolCall, ToolDefinition, ToolSpec},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};

use crate::stores::DataStores;
use crate::tools::{orders, policies, products};

/// Tool provider backed by the in-memory store snapshots
#[derive(Debug, Clone)]
pub struct LookupToolProvider {
    stores: DataStores,
    tool_spec: ToolSpec,
}

impl LookupToolProvider {
    pub fn new(stores: DataStores) -> Self {
        Self {
            stores,
            tool_spec: crate::tools::default_tool_spec(),
        }
    }

    /// Internal execute implementation
    fn execute_internal(&self, call: &ToolCall) -> Result<ToolResult, ProviderError> {
        let definition = self
            .tool_spec
            .get(&call.tool_name)
            .ok_or_else(|| ProviderError::ToolNotFound(call.tool_name.clone()))?;

        let validator = DefaultToolValidator;
        if let Err(e) = validator.validate(call, definition) {
            return Ok(ToolResult::failure(
                &call.tool_name,
                ToolError::invalid_argument(e),
            ));
        }

        let result = match call.tool_name.as_str() {
            products::SEARCH_PRODUCTS => {
                products::execute_search_products(&self.stores.catalog, call)
            }
            orders::CHECK_ORDER => orders::execute_check_order(&self.stores.orders, call),
            policies::GET_POLICY_ANSWER => {
                policies::execute_get_policy_answer(&self.stores.faqs, call)
            }
            _ => return Err(ProviderError::ToolNotFound(call.tool_name.clone())),
        };

        Ok(result)
    }
}

#[async_trait]
impl ToolProvider for LookupToolProvider {
    fn id(&self) -> &str {
        "lookup"
    }

    fn display_name(&self) -> &str {
        "Store Lookup Tools"
    }

    async fn is_available(&self) -> bool {
        // Snapshots always exist, even when degraded to empty
        true
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        Ok(self.tool_spec.all().cloned().collect())
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match self.execute_internal(call) {
            Ok(result) => result,
            Err(e) => ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed(e.to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clerk_domain::{FaqRecord, OrderRecord, ProductRecord};

    fn provider() -> LookupToolProvider {
        LookupToolProvider::new(DataStores::from_records(
            vec![ProductRecord::new("Sony WH-1000XM4")],
            vec![OrderRecord::new("ORD-1042").with_detail("status", "shipped")],
            vec![FaqRecord::new("What is your refund policy?", "30 days.")],
        ))
    }

    #[tokio::test]
    async fn discovers_all_three_tools() {
        let tools = provider().discover_tools().await.unwrap();
        let mut names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        assert_eq!(names, ["check_order", "get_policy_answer", "search_products"]);
    }

    #[tokio::test]
    async fn routes_each_tool_to_its_store() {
        let provider = provider();

        let search = provider
            .execute(&ToolCall::new("search_products").with_arg("query", "sony"))
            .await;
        assert!(search.output().unwrap().contains("Sony WH-1000XM4"));

        let order = provider
            .execute(&ToolCall::new("check_order").with_arg("order_id", "1042"))
            .await;
        assert!(order.output().unwrap().contains("shipped"));

        let policy = provider
            .execute(&ToolCall::new("get_policy_answer").with_arg("query", "refund"))
            .await;
        assert_eq!(policy.output().unwrap(), "30 days.");
    }

    #[tokio::test]
    async fn unknown_tool_fails_without_panicking() {
        let result = provider().execute(&ToolCall::new("warp_drive")).await;
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "EXECUTION_FAILED");
    }

    #[tokio::test]
    async fn invalid_arguments_are_reported_as_tool_failure() {
        let result = provider()
            .execute(&ToolCall::new("search_products").with_arg("qurey", "typo"))
            .await;
        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }
}
