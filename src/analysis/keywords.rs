// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet};

use super::tokenizer::tokenize;

/// Extract up to `limit` keywords from `text`.
///
/// With a non-empty `vocabulary`, every token found in the vocabulary is
/// returned in the order it appears in the text, duplicates included. If no
/// token matches (or no vocabulary is given) the most frequent distinct tokens
/// are returned, highest count first, ties broken by first occurrence.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use pdf_digest::analysis::extract_keywords;
///
/// let ranked = extract_keywords("test test test the a", None, 5);
/// assert_eq!(ranked, vec!["test", "the", "a"]);
///
/// let vocabulary: HashSet<String> = ["ai", "innovation"].iter().map(|s| s.to_string()).collect();
/// let biased = extract_keywords("ai research innovation ai", Some(&vocabulary), 5);
/// assert_eq!(biased, vec!["ai", "innovation", "ai"]);
/// ```
pub fn extract_keywords(
    text: &str,
    vocabulary: Option<&HashSet<String>>,
    limit: usize,
) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let tokens = tokenize(text);

    if let Some(vocabulary) = vocabulary.filter(|v| !v.is_empty()) {
        let hits: Vec<String> = tokens
            .iter()
            .filter(|token| vocabulary.contains(token.as_str()))
            .take(limit)
            .cloned()
            .collect();
        if !hits.is_empty() {
            return hits;
        }
    }

    rank_by_frequency(&tokens, limit)
}

/// Most frequent distinct tokens, sorted on (count desc, first index asc).
fn rank_by_frequency(tokens: &[String], limit: usize) -> Vec<String> {
    // token -> (count, first occurrence)
    let mut frequencies: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, token) in tokens.iter().enumerate() {
        frequencies
            .entry(token.as_str())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, index));
    }

    let mut ranked: Vec<(&str, usize, usize)> = frequencies
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _, _)| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> HashSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_frequency_ranking_with_stable_ties() {
        assert_eq!(
            extract_keywords("test test test the a", None, 5),
            vec!["test", "the", "a"]
        );
    }

    #[test]
    fn test_ranking_on_sentence_text() {
        let text = "This is a test. Test the keyword function. Test test test.";
        assert_eq!(
            extract_keywords(text, None, 5),
            vec!["test", "this", "is", "a", "the"]
        );
    }

    #[test]
    fn test_vocabulary_hits_keep_positional_order() {
        let vocabulary = vocab(&["innovation", "ai"]);
        assert_eq!(
            extract_keywords("ai research innovation ai", Some(&vocabulary), 5),
            vec!["ai", "innovation", "ai"]
        );
    }

    #[test]
    fn test_vocabulary_hits_are_truncated_to_limit() {
        let vocabulary = vocab(&["ai"]);
        assert_eq!(
            extract_keywords("ai ai ai ai", Some(&vocabulary), 2),
            vec!["ai", "ai"]
        );
    }

    #[test]
    fn test_vocabulary_without_hits_falls_back_to_frequency() {
        let vocabulary = vocab(&["technology"]);
        assert_eq!(
            extract_keywords("beta alpha beta", Some(&vocabulary), 5),
            vec!["beta", "alpha"]
        );
    }

    #[test]
    fn test_empty_vocabulary_uses_frequency() {
        let vocabulary = HashSet::new();
        assert_eq!(
            extract_keywords("one two two", Some(&vocabulary), 5),
            vec!["two", "one"]
        );
    }

    #[test]
    fn test_vocabulary_matches_normalized_tokens() {
        let vocabulary = vocab(&["research"]);
        assert_eq!(
            extract_keywords("RESEARCH, and more Research!", Some(&vocabulary), 5),
            vec!["research", "research"]
        );
    }

    #[test]
    fn test_zero_limit_is_empty() {
        assert!(extract_keywords("plenty of words here", None, 0).is_empty());
        let vocabulary = vocab(&["words"]);
        assert!(extract_keywords("plenty of words here", Some(&vocabulary), 0).is_empty());
    }

    #[test]
    fn test_fewer_tokens_than_limit() {
        assert_eq!(extract_keywords("solo", None, 5), vec!["solo"]);
        assert!(extract_keywords("", None, 5).is_empty());
    }
}
