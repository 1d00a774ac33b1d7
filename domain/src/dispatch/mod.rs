//! Dispatcher response types.
//!
//! The conversational dispatcher (the hosted model) is an external
//! collaborator; these types model what it sends back — text and/or tool
//! invocation requests — without any transport detail.

pub mod response;

pub use response::{ContentBlock, DispatcherResponse, StopReason};
