// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{ConfigError, StoreError};

/// Errors that stop a pipeline run outright.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The store could not be initialized; nothing was dispatched.
    #[error("failed to initialize document store: {0}")]
    StoreInit(#[source] StoreError),

    /// The store failed while reading records back after the run.
    #[error("document store error: {0}")]
    Store(#[source] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
