// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by a document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with this key already exists. Stores are insert-only.
    #[error("a record with key '{0}' already exists")]
    DuplicateKey(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
