//! Application use cases.

pub mod converse;

pub use converse::{ConverseError, ConverseUseCase, FALLBACK_REPLY};
