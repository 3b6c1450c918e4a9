// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fan-out/fan-in over a fixed pool of document workers.
//!
//! The dataset is loaded into a FIFO queue in dataset order. `max_concurrency`
//! worker tasks each pop an entry, run it through the [`DocumentProcessor`] to
//! completion, send the outcome back on a channel and take the next entry.
//! The coordinator joins every worker before it samples host metrics, builds
//! the [`PerformanceReport`] and reads the store back, so the report never
//! sees a document still in flight. A failed read-back is carried in the
//! [`PipelineRun`] next to the report instead of replacing it.
//!
//! Completion order is whatever the workers race to; outcomes are put back in
//! dataset order. There is no cancellation, timeout or retry: a fetch that
//! hangs keeps its worker busy until it returns.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex};
use tracing::Instrument;

use crate::engine::document::DocumentProcessor;
use crate::engine::record::{Dataset, DatasetEntry};
use crate::engine::report::{DocumentOutcome, PerformanceReport, PipelineRun};
use crate::errors::ProcessingError;
use crate::observability::messages::engine::{
    PipelineCompleted, PipelineStarted, RecordsReadBackFailed, WorkerAborted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{DocumentStore, HostMetrics};

type WorkQueue = Arc<Mutex<VecDeque<(usize, DatasetEntry)>>>;
type Outcome = (usize, Result<(), ProcessingError>);

/// Runs a dataset through a bounded pool of document workers.
pub struct PipelineCoordinator {
    processor: DocumentProcessor,
    host_metrics: Arc<dyn HostMetrics>,
    max_concurrency: usize,
}

impl PipelineCoordinator {
    /// `max_concurrency` is the fixed worker count; zero is treated as one.
    pub fn new(
        processor: DocumentProcessor,
        host_metrics: Arc<dyn HostMetrics>,
        max_concurrency: usize,
    ) -> Self {
        Self {
            processor,
            host_metrics,
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Process every dataset entry, then report and read the store back.
    ///
    /// Per-document failures are collected into the returned outcomes and
    /// counted in the report. A store read-back failure is logged and kept
    /// in [`PipelineRun::records`]; the report is produced regardless.
    pub async fn run(&self, dataset: &Dataset) -> PipelineRun {
        let started = PipelineStarted {
            document_count: dataset.len(),
            max_concurrency: self.max_concurrency,
        };
        let span = started.span("run");

        async {
            let clock = Instant::now();
            self.host_metrics.begin();
            started.log();

            let results = self.dispatch_and_join(dataset).await;
            let outcomes = collect_outcomes(dataset, results);
            let duration = clock.elapsed();

            let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
            let failed = outcomes.len() - succeeded;

            PipelineCompleted {
                attempted: outcomes.len(),
                succeeded,
                failed,
                duration,
            }
            .log();

            let snapshot = self.host_metrics.snapshot();
            let report = PerformanceReport {
                total_documents: dataset.len(),
                succeeded,
                failed,
                duration,
                cpu_percent: snapshot.cpu_percent,
                memory: snapshot.memory,
            };

            let store = self.processor.store();
            let records = store.scan_all().await;
            if let Err(error) = &records {
                RecordsReadBackFailed {
                    store: store.name(),
                    error,
                }
                .log();
            }

            PipelineRun {
                report,
                outcomes,
                records,
            }
        }
        .instrument(span)
        .await
    }

    /// Spawn the worker pool over the dataset and wait for all of it.
    async fn dispatch_and_join(&self, dataset: &Dataset) -> Vec<Outcome> {
        if dataset.is_empty() {
            return Vec::new();
        }

        let queue: WorkQueue = Arc::new(Mutex::new(
            dataset.iter().cloned().enumerate().collect(),
        ));
        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

        let worker_count = self.max_concurrency.min(dataset.len());
        let mut workers = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            workers.push(tokio::spawn(
                run_worker(self.processor.clone(), queue.clone(), tx.clone()).in_current_span(),
            ));
        }
        drop(tx);

        // Barrier: every worker has drained the queue or died.
        for worker in workers {
            if let Err(join_error) = worker.await {
                tracing::error!(error = %join_error, "document worker terminated abnormally");
            }
        }

        let mut results = Vec::with_capacity(dataset.len());
        while let Some(outcome) = rx.recv().await {
            results.push(outcome);
        }
        results
    }
}

async fn run_worker(
    processor: DocumentProcessor,
    queue: WorkQueue,
    results: mpsc::UnboundedSender<Outcome>,
) {
    loop {
        // Release the queue lock before processing.
        let next = queue.lock().await.pop_front();
        let Some((index, entry)) = next else {
            break;
        };

        let result = processor
            .process(&entry.pdf_key, &entry.url)
            .await
            .map(|_| ());

        if results.send((index, result)).is_err() {
            break;
        }
    }
}

/// Put outcomes back in dataset order. An entry with no outcome had its
/// worker die under it (or never got picked up) and is recorded as aborted.
fn collect_outcomes(dataset: &Dataset, results: Vec<Outcome>) -> Vec<DocumentOutcome> {
    let mut slots: Vec<Option<Result<(), ProcessingError>>> =
        (0..dataset.len()).map(|_| None).collect();
    for (index, result) in results {
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(result);
        }
    }

    dataset
        .iter()
        .zip(slots)
        .map(|(entry, slot)| {
            let result = slot.unwrap_or_else(|| {
                let reason = "worker exited before reporting an outcome";
                WorkerAborted {
                    pdf_key: &entry.pdf_key,
                    reason,
                }
                .log();
                Err(ProcessingError::Aborted {
                    pdf_key: entry.pdf_key.clone(),
                    reason: reason.to_string(),
                })
            });
            DocumentOutcome {
                pdf_key: entry.pdf_key.clone(),
                url: entry.url.clone(),
                result,
            }
        })
        .collect()
}
