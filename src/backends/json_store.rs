// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Append-only store persisting one JSON record per line.
//!
//! A write that fails partway is rolled back by truncating the file to its
//! last committed length, so one failed insert never leaves a half line that
//! breaks every later read.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::engine::ProcessedRecord;
use crate::errors::StoreError;
use crate::traits::DocumentStore;

struct Inner {
    file: File,
    /// File length after the last complete line.
    committed_len: u64,
    keys: HashSet<String>,
}

pub struct JsonLinesStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl JsonLinesStore {
    /// Open (creating if needed) the store at `path`.
    ///
    /// Keys already present in the file are loaded so duplicates are rejected
    /// across runs. A file that cannot be parsed refuses to open.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        let content = fs::read_to_string(&path).await?;
        let existing = parse_records(&content)?;
        let keys = existing.into_iter().map(|r| r.pdf_key).collect();

        // last record written without its newline
        if !content.is_empty() && !content.ends_with('\n') {
            file.write_all(b"\n").await?;
            file.flush().await?;
        }
        let committed_len = file.metadata().await?.len();

        Ok(Self {
            path,
            inner: Mutex::new(Inner {
                file,
                committed_len,
                keys,
            }),
        })
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.keys.len()
    }
}

async fn read_records(path: &Path) -> Result<Vec<ProcessedRecord>, StoreError> {
    let content = fs::read_to_string(path).await?;
    parse_records(&content)
}

fn parse_records(content: &str) -> Result<Vec<ProcessedRecord>, StoreError> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(StoreError::from))
        .collect()
}

async fn append_line(file: &mut File, line: &[u8]) -> std::io::Result<()> {
    file.write_all(line).await?;
    file.flush().await
}

#[async_trait]
impl DocumentStore for JsonLinesStore {
    async fn insert(&self, record: ProcessedRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let mut inner = self.inner.lock().await;
        if inner.keys.contains(&record.pdf_key) {
            return Err(StoreError::DuplicateKey(record.pdf_key));
        }

        if let Err(error) = append_line(&mut inner.file, line.as_bytes()).await {
            let committed_len = inner.committed_len;
            if let Err(truncate_error) = inner.file.set_len(committed_len).await {
                tracing::error!(
                    error = %truncate_error,
                    committed_len,
                    "failed to roll back partial record write"
                );
            }
            return Err(error.into());
        }

        inner.committed_len += line.len() as u64;
        inner.keys.insert(record.pdf_key);
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<ProcessedRecord>, StoreError> {
        // Hold the lock so a half-written line is never observed.
        let _guard = self.inner.lock().await;
        read_records(&self.path).await
    }

    fn name(&self) -> &'static str {
        "json_lines"
    }
}
