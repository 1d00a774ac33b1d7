//! Application layer for storeclerk
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DispatchParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    dispatcher::{DispatcherGateway, DispatcherSession, GatewayError, ToolResultMessage},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::converse::{ConverseError, ConverseUseCase, FALLBACK_REPLY};
