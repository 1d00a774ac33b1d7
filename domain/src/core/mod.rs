//! Core domain concepts shared across all subdomains.
//!
//! - [`error::StoreError`] — classified store-access failures

pub mod error;
