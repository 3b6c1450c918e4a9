// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure to retrieve the raw bytes behind a locator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The source answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}
