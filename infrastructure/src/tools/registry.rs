//! Tool Registry
//!
//! The [`ToolRegistry`] aggregates tool providers and implements
//! [`ToolExecutorPort`], routing each call to the provider that declared
//! the tool. The assistant normally runs with the single lookup provider,
//! but the registry keeps the name-based routing so additional providers
//! slot in without touching the dispatch loop. When two providers declare
//! the same tool, the first-registered one wins.
//!
//! `discover()` must be called once before execution: it queries each
//! provider for its tools and builds the merged [`ToolSpec`] handed to the
//! dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use clerk_application::ports::tool_executor::ToolExecutorPort;
use clerk_domain::tool::{
    entities::{ToolCall, ToolSpec},
    provider::ToolProvider,
    value_objects::{ToolError, ToolResult},
};

/// Tool registry that routes calls to their providers
pub struct ToolRegistry {
    /// Registered providers
    providers: Vec<Arc<dyn ToolProvider>>,
    /// Tool name -> provider ID mapping (cached after discovery)
    tool_mapping: HashMap<String, String>,
    /// Merged tool specification
    tool_spec: ToolSpec,
    /// Whether discovery has been run
    discovered: bool,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            tool_mapping: HashMap::new(),
            tool_spec: ToolSpec::new(),
            discovered: false,
        }
    }

    /// Register a tool provider
    pub fn register<P: ToolProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Arc::new(provider));
        self.discovered = false;
        self
    }

    /// Discover tools from all providers
    ///
    /// This must be called before using the registry.
    pub async fn discover(&mut self) -> Result<(), String> {
        let mut tool_spec = ToolSpec::new();
        let mut tool_mapping = HashMap::new();

        for provider in &self.providers {
            if !provider.is_available().await {
                tracing::debug!(provider = provider.id(), "Provider not available, skipping");
                continue;
            }

            match provider.discover_tools().await {
                Ok(tools) => {
                    for tool in tools {
                        // First-registered provider keeps the name
                        if !tool_mapping.contains_key(&tool.name) {
                            tracing::debug!(
                                tool = %tool.name,
                                provider = provider.id(),
                                "Registered tool"
                            );
                            tool_mapping.insert(tool.name.clone(), provider.id().to_string());
                            tool_spec = tool_spec.register(tool);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.id(),
                        error = %e,
                        "Failed to discover tools from provider"
                    );
                }
            }
        }

        self.tool_spec = tool_spec;
        self.tool_mapping = tool_mapping;
        self.discovered = true;

        Ok(())
    }

    /// Get the provider for a specific tool
    fn provider_for(&self, tool_name: &str) -> Option<&Arc<dyn ToolProvider>> {
        let provider_id = self.tool_mapping.get(tool_name)?;
        self.providers.iter().find(|p| p.id() == provider_id)
    }

    /// Get a list of registered provider IDs
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Get statistics about registered tools
    pub fn stats(&self) -> RegistryStats {
        let mut tools_per_provider = HashMap::new();
        for provider_id in self.tool_mapping.values() {
            *tools_per_provider.entry(provider_id.clone()).or_insert(0) += 1;
        }

        RegistryStats {
            total_providers: self.providers.len(),
            total_tools: self.tool_mapping.len(),
            tools_per_provider,
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the registry
#[derive(Debug, Clone)]
pub struct RegistryStats {
    pub total_providers: usize,
    pub total_tools: usize,
    pub tools_per_provider: HashMap<String, usize>,
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        if !self.discovered {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed("Registry not initialized. Call discover() first."),
            );
        }

        match self.provider_for(&call.tool_name) {
            Some(provider) => provider.execute(call).await,
            None => ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name)),
        }
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        // The lookup tools never block, so a current-thread runtime suffices
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();

        match rt {
            Ok(rt) => rt.block_on(self.execute(call)),
            Err(e) => ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed(format!("Failed to create runtime: {}", e)),
            ),
        }
    }
}
