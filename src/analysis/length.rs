// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tokenizer::tokenize;

/// Token count at which a document stops being short.
pub const MEDIUM_THRESHOLD: usize = 100;
/// Token count at which a document stops being medium.
pub const LONG_THRESHOLD: usize = 500;

/// Length bucket that drives how much of a document is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthCategory {
    Short,
    Medium,
    Long,
}

impl LengthCategory {
    /// Bucket an already-computed token count.
    pub fn from_token_count(count: usize) -> Self {
        if count < MEDIUM_THRESHOLD {
            LengthCategory::Short
        } else if count < LONG_THRESHOLD {
            LengthCategory::Medium
        } else {
            LengthCategory::Long
        }
    }

    /// Number of leading sentence segments a summary keeps for this bucket.
    pub fn summary_segments(self) -> usize {
        match self {
            LengthCategory::Short => 1,
            LengthCategory::Medium => 3,
            LengthCategory::Long => 5,
        }
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LengthCategory::Short => "short",
            LengthCategory::Medium => "medium",
            LengthCategory::Long => "long",
        };
        f.write_str(label)
    }
}

/// Classify a document by its token count.
pub fn classify(text: &str) -> LengthCategory {
    LengthCategory::from_token_count(tokenize(text).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(&words(99)), LengthCategory::Short);
        assert_eq!(classify(&words(100)), LengthCategory::Medium);
        assert_eq!(classify(&words(499)), LengthCategory::Medium);
        assert_eq!(classify(&words(500)), LengthCategory::Long);
        assert_eq!(classify(&words(501)), LengthCategory::Long);
    }

    #[test]
    fn test_empty_text_is_short() {
        assert_eq!(classify(""), LengthCategory::Short);
    }

    #[test]
    fn test_repeated_sentences() {
        assert_eq!(classify("Short text."), LengthCategory::Short);
        // 5 tokens per repetition once the hyphen is stripped
        assert_eq!(
            classify(&"This is a medium-length text. ".repeat(20)),
            LengthCategory::Medium
        );
        assert_eq!(
            classify(&"This is a long document. ".repeat(100)),
            LengthCategory::Long
        );
    }

    #[test]
    fn test_punctuation_does_not_count() {
        let text = format!("{} , . ! ?", words(99));
        assert_eq!(classify(&text), LengthCategory::Short);
    }

    #[test]
    fn test_summary_segments() {
        assert_eq!(LengthCategory::Short.summary_segments(), 1);
        assert_eq!(LengthCategory::Medium.summary_segments(), 3);
        assert_eq!(LengthCategory::Long.summary_segments(), 5);
    }
}
