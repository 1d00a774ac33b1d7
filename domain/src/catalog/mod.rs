//! Product catalog subdomain.
//!
//! The catalog is an ordered, read-only snapshot of product records. Search
//! is deliberately fuzzy: voice queries arrive through a speech-to-text
//! pipeline that routinely mangles brand and model names ("sony w h 1000"),
//! so an exact-match lookup would fail too often to be useful.
//!
//! - [`entities::ProductRecord`] — a product with arbitrary extra attributes
//! - [`matching::partial_ratio`] — 0–100 best-window similarity score
//! - [`search::search_products`] — ranked, confidence-annotated search

pub mod entities;
pub mod matching;
pub mod search;

pub use entities::ProductRecord;
pub use matching::partial_ratio;
pub use search::{MATCH_THRESHOLD, MAX_MATCHES, SearchOutcome, search_products};
