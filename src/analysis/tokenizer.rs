// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Normalize raw text into word tokens.
///
/// The text is lower-cased, every ASCII punctuation character is removed,
/// and the remainder is split on runs of whitespace. Empty tokens never
/// appear in the output.
///
/// # Example
/// ```
/// use pdf_digest::analysis::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
