//! Domain layer for storeclerk
//!
//! This crate contains the record types, matching algorithms, and tool
//! abstractions at the core of the assistant. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Resolvers
//!
//! A resolver is a pure lookup function over an in-memory store snapshot,
//! invoked by the conversational dispatcher to answer one question category:
//!
//! - [`catalog`] — fuzzy product search over the product catalog
//! - [`orders`] — order status lookup by (suffix-matched) order ID
//! - [`policy`] — FAQ answer lookup by substring match
//!
//! ## Tools
//!
//! Each resolver is surfaced to the dispatcher as a named tool with a single
//! string parameter. The [`tool`] module defines the registry, call, and
//! result types; execution lives in the infrastructure layer.

pub mod catalog;
pub mod core;
pub mod dispatch;
pub mod orders;
pub mod policy;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use catalog::{
    entities::ProductRecord,
    matching::partial_ratio,
    search::{MATCH_THRESHOLD, MAX_MATCHES, SearchOutcome, search_products},
};
pub use core::error::StoreError;
pub use dispatch::response::{ContentBlock, DispatcherResponse, StopReason};
pub use orders::{OrderRecord, clean_order_id, find_order};
pub use policy::{FaqRecord, find_policy_answer};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    provider::{ProviderError, ToolProvider},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
pub use util::truncate_str;
