// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::Mutex;

use crate::engine::ProcessedRecord;
use crate::errors::StoreError;
use crate::traits::DocumentStore;

#[derive(Default)]
struct Inner {
    records: Vec<ProcessedRecord>,
    keys: HashSet<String>,
}

/// Process-local store. Records live as long as the store does.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, record: ProcessedRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        if !inner.keys.insert(record.pdf_key.clone()) {
            return Err(StoreError::DuplicateKey(record.pdf_key));
        }
        inner.records.push(record);
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<ProcessedRecord>, StoreError> {
        Ok(self.inner.lock().await.records.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
