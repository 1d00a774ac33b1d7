//! Fail-open JSON store loading.

use clerk_domain::StoreError;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::warn;

/// Read a JSON array of records, classifying the failure mode.
///
/// Used directly by tests that need to distinguish a missing file from
/// invalid JSON; production callers go through [`load_records`].
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| StoreError::Malformed(format!("{}: {}", path.display(), e)))
}

/// Load a JSON array of records, degrading to empty on any failure.
///
/// This is the "fail open, return empty" boundary: a corrupted or absent
/// source is logged as a warning and the caller receives an empty store,
/// so search yields a normal "nothing found" outcome rather than aborting
/// the process.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match read_records(path) {
        Ok(records) => records,
        Err(e) => {
            warn!("Error loading {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clerk_domain::ProductRecord;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_is_unavailable() {
        let err = read_records::<ProductRecord>(Path::new("/nonexistent/products.json"))
            .unwrap_err();
        assert!(!err.is_malformed());
    }

    #[test]
    fn invalid_json_is_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = read_records::<ProductRecord>(file.path()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn wrong_shape_is_malformed() {
        // Top-level object instead of array
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Kettle"}}"#).unwrap();

        let err = read_records::<ProductRecord>(file.path()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn load_records_degrades_to_empty_without_panicking() {
        let missing: Vec<ProductRecord> = load_records(Path::new("/nonexistent/products.json"));
        assert!(missing.is_empty());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[[").unwrap();
        let malformed: Vec<ProductRecord> = load_records(file.path());
        assert!(malformed.is_empty());
    }

    #[test]
    fn valid_array_loads_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "A"}}, {{"name": "B"}}, {{"name": "C"}}]"#
        )
        .unwrap();

        let records: Vec<ProductRecord> = load_records(file.path());
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
