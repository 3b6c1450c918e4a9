// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dataset and store setup.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Dataset file loaded.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DatasetLoaded<'a> {
    pub path: &'a Path,
    pub entry_count: usize,
}

impl Display for DatasetLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} dataset entries from {}",
            self.entry_count,
            self.path.display()
        )
    }
}

impl StructuredLog for DatasetLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            entry_count = self.entry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dataset_loaded",
            span_name = name,
            path = %self.path.display(),
            entry_count = self.entry_count,
        )
    }
}

/// Dataset could not be read; the run continues with no entries.
///
/// # Log Level
/// `warn!` - Recoverable problem
///
/// # Example
/// ```
/// use std::path::Path;
/// use pdf_digest::observability::messages::dataset::DatasetLoadFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let msg = DatasetLoadFailed {
///     path: Path::new("dataset.json"),
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "Error reading dataset dataset.json: no such file");
/// ```
pub struct DatasetLoadFailed<'a> {
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for DatasetLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Error reading dataset {}: {}",
            self.path.display(),
            self.error
        )
    }
}

impl StructuredLog for DatasetLoadFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            path = %self.path.display(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "dataset_load_failed",
            span_name = name,
            path = %self.path.display(),
        )
    }
}

/// Document store opened and ready for writes.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StoreOpened<'a> {
    pub store: &'a str,
    pub existing_records: usize,
}

impl Display for StoreOpened<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Opened {} document store ({} existing records)",
            self.store, self.existing_records
        )
    }
}

impl StructuredLog for StoreOpened<'_> {
    fn log(&self) {
        tracing::info!(
            store = self.store,
            existing_records = self.existing_records,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "store_opened",
            span_name = name,
            store = self.store,
        )
    }
}
