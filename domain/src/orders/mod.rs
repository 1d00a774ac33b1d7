//! Order subdomain.
//!
//! Orders are looked up by ID with a deliberately weak matching policy:
//! the conventional `ORD-` prefix is stripped and the remainder is compared
//! as a *suffix* of the stored ID. Voice input rarely carries the full
//! prefix ("check order ten forty-two"), so suffix matching trades a small
//! collision risk for far better recall. First match in store order wins.

use serde::{Deserialize, Serialize};

/// Conventional order-ID prefix stripped before matching.
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// A single order with its status payload.
///
/// `order_id` is the identity; the rest of the record (status, ETA, items,
/// ...) is carried schema-free and serialized back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub order_id: String,
    /// Status/detail payload, schema-free
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl OrderRecord {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            details: serde_json::Map::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Normalize a spoken or typed order ID for matching.
///
/// Strips every occurrence of the literal `ORD-` prefix (case-sensitive)
/// and surrounding whitespace.
pub fn clean_order_id(raw: &str) -> String {
    raw.replace(ORDER_ID_PREFIX, "").trim().to_string()
}

/// Find the first order whose ID ends with the cleaned input.
///
/// Store order is the tie-break when several IDs share a suffix; result
/// determinism therefore follows load order, which is acceptable for the
/// small datasets this serves.
pub fn find_order<'a>(orders: &'a [OrderRecord], order_id: &str) -> Option<&'a OrderRecord> {
    let needle = clean_order_id(order_id);
    orders.iter().find(|o| o.order_id.ends_with(&needle))
}
