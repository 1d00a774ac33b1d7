//! Presentation layer for storeclerk
//!
//! This crate contains the CLI definition, output formatting, and the
//! interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
