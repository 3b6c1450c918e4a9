// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-document failures. None of these abort a pipeline run.

use thiserror::Error;

use super::{FetchError, StoreError};

/// Which step of processing a single document failed.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("failed to fetch {locator}: {source}")]
    Fetch {
        locator: String,
        #[source]
        source: FetchError,
    },

    #[error("no text could be extracted from {locator}")]
    Extraction { locator: String },

    #[error("failed to persist '{pdf_key}': {source}")]
    Persistence {
        pdf_key: String,
        #[source]
        source: StoreError,
    },

    /// The worker running this document died before reporting back.
    #[error("processing of '{pdf_key}' aborted: {reason}")]
    Aborted { pdf_key: String, reason: String },
}

impl ProcessingError {
    /// Short name of the failed step, used as a structured log field.
    pub fn stage(&self) -> &'static str {
        match self {
            ProcessingError::Fetch { .. } => "fetch",
            ProcessingError::Extraction { .. } => "extraction",
            ProcessingError::Persistence { .. } => "persistence",
            ProcessingError::Aborted { .. } => "aborted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_document() {
        let err = ProcessingError::Fetch {
            locator: "http://example.com/a.pdf".to_string(),
            source: FetchError::Status { status: 404 },
        };
        assert_eq!(err.to_string(), "failed to fetch http://example.com/a.pdf: unexpected status 404");
        assert_eq!(err.stage(), "fetch");

        let err = ProcessingError::Persistence {
            pdf_key: "doc1".to_string(),
            source: StoreError::DuplicateKey("doc1".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to persist 'doc1': a record with key 'doc1' already exists"
        );
        assert_eq!(err.stage(), "persistence");
    }
}
