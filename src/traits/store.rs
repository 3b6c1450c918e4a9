// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::engine::ProcessedRecord;
use crate::errors::StoreError;

/// Append-only document store keyed by `pdf_key`.
///
/// The store is shared by every worker without any locking on the caller's
/// side, so concurrent inserts of different keys must be safe. Inserting a key
/// that already exists fails with [`StoreError::DuplicateKey`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, record: ProcessedRecord) -> Result<(), StoreError>;

    /// Every stored record, in insertion order.
    async fn scan_all(&self) -> Result<Vec<ProcessedRecord>, StoreError>;

    fn name(&self) -> &'static str;
}
