//! Infrastructure layer for storeclerk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including store loading, tool execution,
//! the dispatcher API client, and configuration file loading.

pub mod config;
pub mod dispatcher;
pub mod logging;
pub mod stores;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use dispatcher::GeminiDispatcher;
pub use logging::JsonlConversationLogger;
pub use stores::DataStores;
pub use tools::{
    FunctionDeclarationConverter, LookupToolProvider, ToolRegistry, default_tool_spec,
};
