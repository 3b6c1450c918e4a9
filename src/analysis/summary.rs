// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::length::LengthCategory;

/// Literal sentence delimiter. Not grammar-aware.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Build a leading-sentence summary sized by `category`.
///
/// The text is split on `". "` and the first 1, 3 or 5 segments (short,
/// medium, long) are trimmed and rejoined with `". "`. When later segments
/// are dropped, the period of the delimiter closing the last kept segment is
/// kept with it. Texts with fewer segments than the bucket allows are returned
/// whole.
///
/// # Example
/// ```
/// use pdf_digest::analysis::{summarize, LengthCategory};
///
/// assert_eq!(summarize("S1. S2. S3. S4.", LengthCategory::Medium), "S1. S2. S3.");
/// assert_eq!(summarize("S1. S2. S3. S4.", LengthCategory::Long), "S1. S2. S3. S4.");
/// ```
pub fn summarize(text: &str, category: LengthCategory) -> String {
    let segments: Vec<&str> = text.split(SENTENCE_DELIMITER).collect();
    let keep = category.summary_segments();

    let mut summary = segments
        .iter()
        .take(keep)
        .map(|segment| segment.trim())
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER);

    if segments.len() > keep {
        summary.push('.');
    }

    summary.trim().to_string()
}
