// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processing of a single dataset entry: fetch, extract, analyze, persist.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::Instrument;

use crate::analysis::{classify, extract_keywords, summarize, LengthCategory};
use crate::config::consts::{DEFAULT_KEYWORD_LIMIT, DEFAULT_VOCABULARY};
use crate::engine::record::{excerpt, ProcessedRecord, DEFAULT_EXCERPT_CHARS};
use crate::errors::ProcessingError;
use crate::observability::messages::document::{
    DocumentFailed, DocumentProcessed, DocumentStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{DocumentStore, Fetcher, TextExtractor};

/// Knobs for the text analysis applied to every document.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Terms preferred over raw frequency when picking keywords.
    pub vocabulary: HashSet<String>,
    pub keyword_limit: usize,
    pub excerpt_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY.iter().map(|t| t.to_string()).collect(),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

/// Turns one (key, locator) pair into a stored [`ProcessedRecord`].
///
/// Cheap to clone: collaborators are shared behind `Arc`, so every worker
/// holds its own handle to the same fetcher, extractor and store.
#[derive(Clone)]
pub struct DocumentProcessor {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn DocumentStore>,
    options: Arc<AnalysisOptions>,
}

impl DocumentProcessor {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn TextExtractor>,
        store: Arc<dyn DocumentStore>,
        options: AnalysisOptions,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            store,
            options: Arc::new(options),
        }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Process one document and persist the result.
    ///
    /// Runs inside a `document` span carrying the key and locator, and emits
    /// a success or failure notice either way. Failures are scoped to this
    /// document and never retried.
    pub async fn process(
        &self,
        pdf_key: &str,
        locator: &str,
    ) -> Result<ProcessedRecord, ProcessingError> {
        let started = DocumentStarted {
            pdf_key,
            url: locator,
        };
        let span = started.span("process");

        async {
            started.log();
            let result = self.try_process(pdf_key, locator).await;

            match &result {
                Ok((record, category)) => DocumentProcessed {
                    pdf_key,
                    url: locator,
                    category: &category.to_string(),
                    keyword_count: record.keywords.len(),
                }
                .log(),
                Err(error) => DocumentFailed {
                    pdf_key,
                    url: locator,
                    stage: error.stage(),
                    error,
                }
                .log(),
            }

            result.map(|(record, _)| record)
        }
        .instrument(span)
        .await
    }

    async fn try_process(
        &self,
        pdf_key: &str,
        locator: &str,
    ) -> Result<(ProcessedRecord, LengthCategory), ProcessingError> {
        let raw = self
            .fetcher
            .fetch(locator)
            .await
            .map_err(|source| ProcessingError::Fetch {
                locator: locator.to_string(),
                source,
            })?;

        let text = self
            .extractor
            .extract(&raw)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ProcessingError::Extraction {
                locator: locator.to_string(),
            })?;
        drop(raw);

        let category = classify(&text);
        let record = self.build_record(pdf_key, locator, &text, category);

        self.store
            .insert(record.clone())
            .await
            .map_err(|source| ProcessingError::Persistence {
                pdf_key: pdf_key.to_string(),
                source,
            })?;

        Ok((record, category))
    }

    /// Derive the record for already-extracted text. Pure.
    pub fn analyze(&self, pdf_key: &str, url: &str, text: &str) -> ProcessedRecord {
        self.build_record(pdf_key, url, text, classify(text))
    }

    fn build_record(
        &self,
        pdf_key: &str,
        url: &str,
        text: &str,
        category: LengthCategory,
    ) -> ProcessedRecord {
        let vocabulary = Some(&self.options.vocabulary).filter(|v| !v.is_empty());

        ProcessedRecord {
            pdf_key: pdf_key.to_string(),
            url: url.to_string(),
            summary: summarize(text, category),
            keywords: extract_keywords(text, vocabulary, self.options.keyword_limit),
            text_excerpt: excerpt(text, self.options.excerpt_chars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::extract::{PlainTextExtractor, SimulatedPdfExtractor, SIMULATED_TEXT};
    use crate::backends::stub::{FailingFetcher, StaticFetcher};
    use crate::backends::InMemoryStore;
    use crate::errors::{FetchError, StoreError};

    const URL: &str = "https://example.com/a.pdf";

    fn processor(fetcher: Arc<dyn Fetcher>, store: Arc<InMemoryStore>) -> DocumentProcessor {
        DocumentProcessor::new(
            fetcher,
            Arc::new(PlainTextExtractor),
            store,
            AnalysisOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_successful_document_is_stored() {
        let store = Arc::new(InMemoryStore::new());
        let fetcher = StaticFetcher::new().with(URL, "AI research drives innovation. Second point. Third.");
        let processor = processor(Arc::new(fetcher), store.clone());

        let record = processor.process("doc1", URL).await.unwrap();

        assert_eq!(record.pdf_key, "doc1");
        assert_eq!(record.url, URL);
        assert_eq!(record.summary, "AI research drives innovation.");
        assert_eq!(record.keywords, vec!["ai", "research", "innovation"]);
        assert_eq!(store.scan_all().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_fetch_failure_stores_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let processor = processor(Arc::new(FailingFetcher), store.clone());

        let err = processor.process("doc1", URL).await.unwrap_err();

        assert!(matches!(
            err,
            ProcessingError::Fetch { source: FetchError::Transport(_), .. }
        ));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_empty_extraction_fails() {
        let store = Arc::new(InMemoryStore::new());
        let fetcher = StaticFetcher::new().with(URL, "   ");
        let processor = processor(Arc::new(fetcher), store.clone());

        let err = processor.process("doc1", URL).await.unwrap_err();

        assert!(matches!(err, ProcessingError::Extraction { ref locator } if locator == URL));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_key_is_persistence_failure() {
        let store = Arc::new(InMemoryStore::new());
        let fetcher = StaticFetcher::new().with(URL, "Some text.");
        let processor = processor(Arc::new(fetcher), store.clone());

        processor.process("doc1", URL).await.unwrap();
        let err = processor.process("doc1", URL).await.unwrap_err();

        assert!(matches!(
            err,
            ProcessingError::Persistence { source: StoreError::DuplicateKey(_), .. }
        ));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_simulated_extractor_record() {
        let store = Arc::new(InMemoryStore::new());
        let processor = DocumentProcessor::new(
            Arc::new(StaticFetcher::new().with(URL, "%PDF-1.4")),
            Arc::new(SimulatedPdfExtractor),
            store,
            AnalysisOptions::default(),
        );

        let record = processor.process("sim", URL).await.unwrap();

        assert_eq!(record.summary, "Simulated PDF content for testing.");
        // no vocabulary hits, so plain frequency ranking
        assert_eq!(record.keywords, vec!["this", "is", "the", "sentence", "simulated"]);
        assert_eq!(record.text_excerpt, SIMULATED_TEXT);
    }

    #[test]
    fn test_analyze_truncates_excerpt() {
        let processor = DocumentProcessor::new(
            Arc::new(FailingFetcher),
            Arc::new(PlainTextExtractor),
            Arc::new(InMemoryStore::new()),
            AnalysisOptions {
                vocabulary: HashSet::new(),
                keyword_limit: 2,
                excerpt_chars: 500,
            },
        );
        let text = "word ".repeat(200);

        let record = processor.analyze("k", URL, &text);

        assert_eq!(record.text_excerpt.chars().count(), 500);
        assert!(text.starts_with(&record.text_excerpt));
        assert_eq!(record.keywords, vec!["word"]);
    }
}
