// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of characters of extracted text kept on a record.
pub const DEFAULT_EXCERPT_CHARS: usize = 500;

/// One dataset entry: a unique key and the locator its bytes live at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    pub pdf_key: String,
    pub url: String,
}

impl DatasetEntry {
    pub fn new(pdf_key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            pdf_key: pdf_key.into(),
            url: url.into(),
        }
    }
}

/// Newtype wrapper for the dataset, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset(pub Vec<DatasetEntry>);

impl Dataset {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append an entry without checking for an existing key. Callers feeding
    /// keys that may repeat go through `collect()` instead.
    pub fn push(&mut self, entry: DatasetEntry) {
        self.0.push(entry);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetEntry> {
        self.0.iter()
    }
}

/// A repeated key replaces the earlier entry's locator in place, so keys stay
/// unique and keep the position they were first seen at.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut dataset = Dataset::with_capacity(iter.size_hint().0);
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(iter.size_hint().0);

        for (key, url) in iter {
            let entry = DatasetEntry::new(key, url);
            match positions.get(&entry.pdf_key) {
                Some(&index) => dataset.0[index] = entry,
                None => {
                    positions.insert(entry.pdf_key.clone(), dataset.len());
                    dataset.push(entry);
                }
            }
        }
        dataset
    }
}

/// Persisted result of processing one dataset entry. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub pdf_key: String,
    pub url: String,
    pub summary: String,
    /// Ranking order, at most the configured keyword limit.
    pub keywords: Vec<String>,
    /// Leading characters of the extracted text.
    pub text_excerpt: String,
}

/// First `max_chars` characters of `text` (characters, not bytes).
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_counts_characters() {
        assert_eq!(excerpt("héllo wörld", 7), "héllo w");
        assert_eq!(excerpt("short", 500), "short");
        assert_eq!(excerpt("", 10), "");
    }

    #[test]
    fn test_dataset_keeps_order_and_unique_keys() {
        let dataset: Dataset = vec![("b", "u1"), ("a", "u2"), ("b", "u3")].into_iter().collect();
        assert_eq!(
            dataset.0,
            vec![DatasetEntry::new("b", "u3"), DatasetEntry::new("a", "u2")]
        );
    }

    #[test]
    fn test_collect_large_dataset_with_repeats() {
        let pairs = (0..60_000).map(|i| (format!("doc{}", i % 40_000), format!("u{}", i)));

        let dataset: Dataset = pairs.collect();

        assert_eq!(dataset.len(), 40_000);
        assert_eq!(dataset.0[0], DatasetEntry::new("doc0", "u40000"));
        assert_eq!(dataset.0[39_999], DatasetEntry::new("doc39999", "u39999"));
        assert_eq!(dataset.0[19_999], DatasetEntry::new("doc19999", "u59999"));
    }
}
