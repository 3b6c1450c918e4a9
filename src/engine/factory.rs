// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::{
    HttpFetcher, InMemoryStore, JsonLinesStore, PlainTextExtractor, SimulatedPdfExtractor,
    SysinfoHostMetrics,
};
use crate::config::{Config, ExtractorKind, StoreConfig};
use crate::engine::coordinator::PipelineCoordinator;
use crate::engine::document::{AnalysisOptions, DocumentProcessor};
use crate::errors::StoreError;
use crate::observability::messages::dataset::StoreOpened;
use crate::observability::messages::StructuredLog;
use crate::traits::{DocumentStore, TextExtractor};

/// Factory for pipeline collaborators built from configuration
pub struct PipelineFactory;

impl PipelineFactory {
    /// Build a coordinator around an already-opened store
    pub fn from_config(cfg: &Config, store: Arc<dyn DocumentStore>) -> PipelineCoordinator {
        let processor = DocumentProcessor::new(
            Arc::new(HttpFetcher::new()),
            Self::extractor(cfg.extractor),
            store,
            Self::analysis_options(cfg),
        );

        PipelineCoordinator::new(
            processor,
            Arc::new(SysinfoHostMetrics::new()),
            cfg.max_concurrency,
        )
    }

    pub fn extractor(kind: ExtractorKind) -> Arc<dyn TextExtractor> {
        match kind {
            ExtractorKind::PlainText => Arc::new(PlainTextExtractor),
            ExtractorKind::Simulated => Arc::new(SimulatedPdfExtractor),
        }
    }

    pub fn analysis_options(cfg: &Config) -> AnalysisOptions {
        AnalysisOptions {
            vocabulary: cfg.vocabulary.iter().map(|t| t.to_lowercase()).collect(),
            keyword_limit: cfg.keyword_limit,
            excerpt_chars: cfg.excerpt_chars,
        }
    }

    /// Open the configured store. Failure here must stop the run.
    pub async fn open_store(cfg: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let (store, existing_records) = match cfg {
            StoreConfig::Memory => {
                let store: Arc<dyn DocumentStore> = Arc::new(InMemoryStore::new());
                (store, 0)
            }
            StoreConfig::JsonLines { path } => {
                let opened = JsonLinesStore::open(path).await?;
                let existing = opened.len().await;
                let store: Arc<dyn DocumentStore> = Arc::new(opened);
                (store, existing)
            }
        };

        StoreOpened {
            store: store.name(),
            existing_records,
        }
        .log();

        Ok(store)
    }
}
