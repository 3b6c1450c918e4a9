// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dataset file loading.
//!
//! A dataset is a JSON object mapping each document key to its locator.
//! Entries are dispatched in file order.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::engine::record::{Dataset, DatasetEntry};
use crate::errors::DatasetError;
use crate::observability::messages::dataset::{DatasetLoadFailed, DatasetLoaded};
use crate::observability::messages::StructuredLog;

/// Parse dataset JSON text.
///
/// Object keys are already unique once parsed (a repeated key keeps its
/// last value), so entries are appended without a lookup.
pub fn parse_dataset(content: &str) -> Result<Dataset, DatasetError> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(map) = value else {
        return Err(DatasetError::NotAnObject);
    };

    let mut dataset = Dataset::with_capacity(map.len());
    for (key, locator) in map {
        match locator {
            Value::String(url) => dataset.push(DatasetEntry::new(key, url)),
            _ => return Err(DatasetError::NonStringLocator { key }),
        }
    }
    Ok(dataset)
}

/// Read and parse a dataset file, reporting why it failed.
pub fn try_load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&content)
}

/// Load a dataset file. Any failure is logged and yields an empty dataset,
/// so the run proceeds and reports zero documents.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Dataset {
    let path = path.as_ref();
    match try_load_dataset(path) {
        Ok(dataset) => {
            DatasetLoaded {
                path,
                entry_count: dataset.len(),
            }
            .log();
            dataset
        }
        Err(error) => {
            DatasetLoadFailed {
                path,
                error: &error,
            }
            .log();
            Dataset::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    #[test]
    fn test_parse_keeps_file_order() {
        let dataset = parse_dataset(
            r#"{"zeta": "https://a.example/z.pdf", "alpha": "https://a.example/a.pdf"}"#,
        )
        .unwrap();

        assert_eq!(
            dataset.0,
            vec![
                DatasetEntry::new("zeta", "https://a.example/z.pdf"),
                DatasetEntry::new("alpha", "https://a.example/a.pdf"),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_non_object_and_non_string() {
        assert!(matches!(parse_dataset("[1, 2]"), Err(DatasetError::NotAnObject)));
        assert!(matches!(
            parse_dataset(r#"{"a": 3}"#),
            Err(DatasetError::NonStringLocator { ref key }) if key == "a"
        ));
        assert!(matches!(parse_dataset("{not json"), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_missing_file_yields_empty_dataset() {
        let dir = tempdir().unwrap();
        let dataset = load_dataset(dir.path().join("missing.json"));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_malformed_file_yields_empty_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, "{\"a\": ").unwrap();

        assert!(load_dataset(&path).is_empty());
        assert!(matches!(try_load_dataset(&path), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, r#"{"doc1": "https://example.com/1.pdf"}"#).unwrap();

        let dataset = load_dataset(&path);
        assert_eq!(dataset.0, vec![DatasetEntry::new("doc1", "https://example.com/1.pdf")]);
    }

    #[test]
    fn test_parse_large_dataset_in_file_order() {
        let body: Vec<String> = (0..50_000)
            .map(|i| format!("\"doc{}\": \"https://example.com/{}.pdf\"", i, i))
            .collect();
        let content = format!("{{{}}}", body.join(","));

        let started = Instant::now();
        let dataset = parse_dataset(&content).unwrap();
        let elapsed = started.elapsed();

        assert_eq!(dataset.len(), 50_000);
        assert_eq!(dataset.0[0], DatasetEntry::new("doc0", "https://example.com/0.pdf"));
        assert_eq!(
            dataset.0[49_999],
            DatasetEntry::new("doc49999", "https://example.com/49999.pdf")
        );
        // one lookup per entry would be quadratic and take far longer
        assert!(elapsed < Duration::from_secs(5), "took {:?}", elapsed);
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let dataset = parse_dataset(r#"{"a": "u1", "b": "u2", "a": "u3"}"#).unwrap();
        let urls: Vec<&str> = dataset.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(dataset.len(), 2);
        assert!(urls.contains(&"u3"));
        assert!(!urls.contains(&"u1"));
    }
}
