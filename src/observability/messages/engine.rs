// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the pipeline run lifecycle.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use pdf_digest::observability::messages::engine::PipelineStarted;
///
/// let msg = PipelineStarted {
///     document_count: 10,
///     max_concurrency: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineStarted {
    pub document_count: usize,
    pub max_concurrency: usize,
}

impl Display for PipelineStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline: {} documents, max_concurrency={}",
            self.document_count, self.max_concurrency
        )
    }
}

impl StructuredLog for PipelineStarted {
    fn log(&self) {
        tracing::info!(
            document_count = self.document_count,
            max_concurrency = self.max_concurrency,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            document_count = self.document_count,
            max_concurrency = self.max_concurrency,
        )
    }
}

/// Every dispatched document has finished, successfully or not.
///
/// # Log Level
/// `info!` when nothing failed, `warn!` otherwise
pub struct PipelineCompleted {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub duration: std::time::Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline completed: {} attempted, {} succeeded, {} failed in {:?}",
            self.attempted, self.succeeded, self.failed, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        if self.failed == 0 {
            tracing::info!(
                attempted = self.attempted,
                succeeded = self.succeeded,
                failed = self.failed,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        } else {
            tracing::warn!(
                attempted = self.attempted,
                succeeded = self.succeeded,
                failed = self.failed,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_completed",
            span_name = name,
            attempted = self.attempted,
            succeeded = self.succeeded,
            failed = self.failed,
            duration = ?self.duration,
        )
    }
}

/// A worker task ended without reporting an outcome (panic or cancellation).
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct WorkerAborted<'a> {
    pub pdf_key: &'a str,
    pub reason: &'a str,
}

impl Display for WorkerAborted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Worker for '{}' aborted: {}", self.pdf_key, self.reason)
    }
}

impl StructuredLog for WorkerAborted<'_> {
    fn log(&self) {
        tracing::error!(
            pdf_key = self.pdf_key,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "worker_aborted",
            span_name = name,
            pdf_key = self.pdf_key,
            reason = self.reason,
        )
    }
}

/// The store could not be read back after the run. The report is still
/// printed; only the record listing is lost.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RecordsReadBackFailed<'a> {
    pub store: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RecordsReadBackFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to read records back from {} store: {}",
            self.store, self.error
        )
    }
}

impl StructuredLog for RecordsReadBackFailed<'_> {
    fn log(&self) {
        tracing::error!(
            store = self.store,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "records_read_back_failed",
            span_name = name,
            store = self.store,
        )
    }
}
