//! Domain error types

use thiserror::Error;

/// Classified failure while reading a data store source.
///
/// These never cross a resolver boundary: the store loader converts both
/// variants into an empty store (with a warning), so a corrupted catalog
/// yields "nothing found" instead of aborting the conversational loop.
/// The distinction exists so tests can assert *why* a load degraded.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store source unavailable: {0}")]
    Unavailable(String),

    #[error("Store source malformed: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Check if this error came from invalid JSON rather than missing data
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::Malformed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let error = StoreError::Unavailable("no such file".to_string());
        assert_eq!(error.to_string(), "Store source unavailable: no such file");
    }

    #[test]
    fn test_is_malformed_check() {
        assert!(StoreError::Malformed("bad json".to_string()).is_malformed());
        assert!(!StoreError::Unavailable("gone".to_string()).is_malformed());
    }
}
