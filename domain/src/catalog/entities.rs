//! Catalog domain entities

use serde::{Deserialize, Serialize};

/// Fallback display name for records missing a usable `name` field.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// A single product in the catalog.
///
/// Only `name` has a fixed meaning — it is the effective natural key used
/// for matching. Everything else (price, stock, description, ...) is
/// carried verbatim in [`attributes`](Self::attributes) and serialized back
/// out unchanged, so the catalog schema can evolve without touching this
/// type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name; the natural key for matching
    #[serde(default)]
    pub name: String,
    /// Derived search-confidence annotation (e.g. "87%").
    ///
    /// Attached to a matched copy by the search path; never present in the
    /// stored catalog and never persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_confidence: Option<String>,
    /// All remaining fields of the source record, schema-free
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            match_confidence: None,
            attributes: serde_json::Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The name to match and display, with a placeholder for nameless records
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_PRODUCT
        } else {
            &self.name
        }
    }

    /// Return a copy annotated with a match-confidence percentage
    pub fn with_confidence(&self, score: u8) -> Self {
        let mut copy = self.clone();
        copy.match_confidence = Some(format!("{}%", score));
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let named = ProductRecord::new("Sony WH-1000XM4");
        assert_eq!(named.display_name(), "Sony WH-1000XM4");

        let nameless = ProductRecord::new("");
        assert_eq!(nameless.display_name(), UNKNOWN_PRODUCT);
    }

    #[test]
    fn test_with_confidence_does_not_mutate_original() {
        let record = ProductRecord::new("USB-C Cable").with_attribute("price", 9.99);
        let annotated = record.with_confidence(87);

        assert_eq!(annotated.match_confidence.as_deref(), Some("87%"));
        assert!(record.match_confidence.is_none());
        assert_eq!(annotated.attributes["price"], 9.99);
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let json = r#"{"name": "Kettle", "price": 25, "stock": 4}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name, "Kettle");
        assert_eq!(record.attributes["price"], 25);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["stock"], 4);
        // No confidence annotation unless search attached one
        assert!(back.get("match_confidence").is_none());
    }

    #[test]
    fn test_missing_name_tolerated() {
        let record: ProductRecord = serde_json::from_str(r#"{"price": 1}"#).unwrap();
        assert_eq!(record.display_name(), UNKNOWN_PRODUCT);
    }
}
