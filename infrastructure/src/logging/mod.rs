//! Logging infrastructure.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
