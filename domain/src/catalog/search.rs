//! Ranked product search over the catalog snapshot.

use super::entities::ProductRecord;
use super::matching::partial_ratio;

/// Minimum partial-ratio score for a candidate to survive filtering.
pub const MATCH_THRESHOLD: u8 = 65;

/// Maximum number of records returned by a single search.
pub const MAX_MATCHES: usize = 3;

/// Outcome of a product search.
///
/// `NoMatch` and `EmptyCatalog` are normal outcomes, not errors — the tool
/// boundary renders them as human sentences for the dispatcher.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Up to [`MAX_MATCHES`] records, best score first, each annotated
    /// with `match_confidence`
    Matches(Vec<ProductRecord>),
    /// Nothing scored at or above [`MATCH_THRESHOLD`]
    NoMatch { query: String },
    /// The catalog snapshot holds no records at all
    EmptyCatalog,
}

impl SearchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, SearchOutcome::Matches(_))
    }
}

/// Fuzzy-search the catalog for products matching `query`.
///
/// Every record's display name is scored with [`partial_ratio`]; the top
/// [`MAX_MATCHES`] candidates are kept, then anything under
/// [`MATCH_THRESHOLD`] is discarded. Ties keep catalog order (first-loaded
/// record wins), so results are deterministic for a given snapshot.
///
/// Each surviving candidate is resolved back to the first record carrying
/// that name and returned as a copy annotated with its confidence score.
pub fn search_products(catalog: &[ProductRecord], query: &str) -> SearchOutcome {
    if catalog.is_empty() {
        return SearchOutcome::EmptyCatalog;
    }

    let mut scored: Vec<(&str, u8)> = catalog
        .iter()
        .map(|p| {
            let name = p.display_name();
            (name, partial_ratio(query, name))
        })
        .collect();

    // Stable sort: equal scores preserve catalog order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let results: Vec<ProductRecord> = scored
        .into_iter()
        .take(MAX_MATCHES)
        .filter(|(_, score)| *score >= MATCH_THRESHOLD)
        .filter_map(|(name, score)| {
            catalog
                .iter()
                .find(|p| p.display_name() == name)
                .map(|p| p.with_confidence(score))
        })
        .collect();

    if results.is_empty() {
        SearchOutcome::NoMatch {
            query: query.to_string(),
        }
    } else {
        SearchOutcome::Matches(results)
    }
}
