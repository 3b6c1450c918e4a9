// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for single-document processing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A worker picked up a document.
///
/// # Log Level
/// `debug!` - Per-document detail
///
/// The span opened from this message wraps the whole fetch/extract/store
/// sequence, so the success or failure notice carries the document's fields.
pub struct DocumentStarted<'a> {
    pub pdf_key: &'a str,
    pub url: &'a str,
}

impl Display for DocumentStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processing {} ({})", self.pdf_key, self.url)
    }
}

impl StructuredLog for DocumentStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            pdf_key = self.pdf_key,
            url = self.url,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "document",
            span_name = name,
            pdf_key = self.pdf_key,
            url = self.url,
        )
    }
}

/// A document was analyzed and stored.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use pdf_digest::observability::messages::document::DocumentProcessed;
///
/// let msg = DocumentProcessed {
///     pdf_key: "report_2024",
///     url: "https://example.com/report.pdf",
///     category: "medium",
///     keyword_count: 5,
/// };
///
/// assert_eq!(msg.to_string(), "Successfully processed and stored report_2024");
/// ```
pub struct DocumentProcessed<'a> {
    pub pdf_key: &'a str,
    pub url: &'a str,
    pub category: &'a str,
    pub keyword_count: usize,
}

impl Display for DocumentProcessed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Successfully processed and stored {}", self.pdf_key)
    }
}

impl StructuredLog for DocumentProcessed<'_> {
    fn log(&self) {
        tracing::info!(
            pdf_key = self.pdf_key,
            url = self.url,
            category = self.category,
            keyword_count = self.keyword_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "document_processed",
            span_name = name,
            pdf_key = self.pdf_key,
            url = self.url,
        )
    }
}

/// Processing of a document stopped at `stage`.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DocumentFailed<'a> {
    pub pdf_key: &'a str,
    pub url: &'a str,
    pub stage: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for DocumentFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to process {} ({}): {}",
            self.pdf_key, self.url, self.error
        )
    }
}

impl StructuredLog for DocumentFailed<'_> {
    fn log(&self) {
        tracing::error!(
            pdf_key = self.pdf_key,
            url = self.url,
            stage = self.stage,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "document_failed",
            span_name = name,
            pdf_key = self.pdf_key,
            url = self.url,
            stage = self.stage,
        )
    }
}
