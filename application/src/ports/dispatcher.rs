//! Dispatcher gateway port
//!
//! Defines the interface for communicating with the hosted conversational
//! model. The model is an opaque collaborator: text goes in, text comes
//! out, and along the way it may request invocations of the registered
//! lookup tools.

use async_trait::async_trait;
use clerk_domain::DispatcherResponse;
use thiserror::Error;

/// Errors that can occur during dispatcher gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Timeout")]
    Timeout,
}

/// Result of a tool execution, sent back to the dispatcher.
///
/// Carries the provider-assigned call ID so the model can correlate the
/// output with its request. `output` is always plain text per the
/// resolver contract.
#[derive(Debug, Clone)]
pub struct ToolResultMessage {
    /// Provider-assigned ID of the originating tool call
    pub tool_use_id: String,
    /// Name of the executed tool
    pub tool_name: String,
    /// Resolver output text (JSON payload or human sentence)
    pub output: String,
    /// Whether the execution failed
    pub is_error: bool,
}

/// Gateway for dispatcher communication
///
/// This port defines how the application layer reaches the hosted model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DispatcherGateway: Send + Sync {
    /// Create a new conversational session with the given system prompt
    async fn create_session(
        &self,
        system_prompt: &str,
    ) -> Result<Box<dyn DispatcherSession>, GatewayError>;
}

/// An active dispatcher session holding conversation history
#[async_trait]
pub trait DispatcherSession: Send + Sync {
    /// Send user text along with the registered tool schemas
    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<DispatcherResponse, GatewayError>;

    /// Send tool execution results back to the model
    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<DispatcherResponse, GatewayError>;
}
