//! Tool domain module
//!
//! Defines how the conversational dispatcher invokes the local resolvers:
//! every resolver is registered as a named tool with a single required
//! string parameter, invoked via a [`ToolCall`], and returns a
//! [`ToolResult`] whose output is always plain text — a JSON payload for
//! structured results, or a human sentence for not-found/error cases.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (text out)   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! The registry is explicit — a mapping from tool name to definition built
//! once at startup and handed to the dispatcher integration. Nothing here
//! relies on reflection over functions.
//!
//! # Key Types
//!
//! - [`ToolSpec`] — registry of available tools
//! - [`ToolDefinition`] — schema for a single tool (name, parameters)
//! - [`ToolCall`] — an invocation request with arguments
//! - [`ToolResult`] — execution outcome
//! - [`ToolValidator`] — pure domain trait for parameter validation
//! - [`ToolProvider`] — abstraction over sources of tools
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for tool execution
//! - **Infrastructure** (`LookupToolProvider`): concrete execution against
//!   the in-memory store snapshots

pub mod entities;
pub mod provider;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use provider::{ProviderError, ToolProvider};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult};
