// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deterministic collaborators for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::backends::InMemoryStore;
use crate::engine::ProcessedRecord;
use crate::errors::{FetchError, StoreError};
use crate::traits::{DocumentStore, Fetcher, HostMetrics, HostSnapshot, MemoryStats};

/// Serves canned payloads by locator; unknown locators answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    payloads: HashMap<String, Vec<u8>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locator: &str, payload: impl Into<Vec<u8>>) -> Self {
        self.payloads.insert(locator.to_string(), payload.into());
        self
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        self.payloads
            .get(locator)
            .cloned()
            .ok_or(FetchError::Status { status: 404 })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Always fails with a transport error.
#[derive(Debug, Clone, Default)]
pub struct FailingFetcher;

#[async_trait]
impl Fetcher for FailingFetcher {
    async fn fetch(&self, _locator: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Transport("simulated network failure".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Wraps another fetcher, delaying each call and recording how many calls
/// were in flight at once.
pub struct InstrumentedFetcher<F> {
    inner: F,
    delay: Duration,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    calls: Arc<AtomicUsize>,
}

impl<F: Fetcher> InstrumentedFetcher<F> {
    pub fn new(inner: F, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            in_flight: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Highest number of concurrent `fetch` calls observed.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for InstrumentedFetcher<F> {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;
        let result = self.inner.fetch(locator).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn name(&self) -> &'static str {
        "instrumented"
    }
}

/// Returns the same snapshot every time.
#[derive(Debug, Clone, Copy)]
pub struct FixedHostMetrics(pub HostSnapshot);

impl Default for FixedHostMetrics {
    fn default() -> Self {
        Self(HostSnapshot {
            cpu_percent: 12.5,
            memory: MemoryStats {
                used_bytes: 3 * 1024 * 1024 * 1024,
                available_bytes: 4 * 1024 * 1024 * 1024,
                total_bytes: 8 * 1024 * 1024 * 1024,
            },
        })
    }
}

impl HostMetrics for FixedHostMetrics {
    fn snapshot(&self) -> HostSnapshot {
        self.0
    }
}

/// Accepts inserts like [`InMemoryStore`] but fails every read-back.
#[derive(Default)]
pub struct UnreadableStore {
    inner: InMemoryStore,
}

impl UnreadableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }
}

#[async_trait]
impl DocumentStore for UnreadableStore {
    async fn insert(&self, record: ProcessedRecord) -> Result<(), StoreError> {
        self.inner.insert(record).await
    }

    async fn scan_all(&self) -> Result<Vec<ProcessedRecord>, StoreError> {
        Err(StoreError::Io(io::Error::new(
            io::ErrorKind::Other,
            "read-back broke",
        )))
    }

    fn name(&self) -> &'static str {
        "unreadable"
    }
}
