// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic and operational log lines are produced by message types in
//! [`messages`]. Each type implements `Display` for the human-readable text and
//! [`messages::StructuredLog`] to emit the same event with typed fields, so
//! the wording lives in one place instead of being scattered across call sites.
//!
//! # Usage
//!
//! ```rust
//! use pdf_digest::observability::messages::document::DocumentFailed;
//! use pdf_digest::observability::messages::StructuredLog;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
//! DocumentFailed {
//!     pdf_key: "report_2024",
//!     url: "https://example.com/report.pdf",
//!     stage: "fetch",
//!     error: &error,
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global `tracing` subscriber.
///
/// Honours `RUST_LOG`; falls back to [`DEFAULT_LOG_FILTER`]. Calling this more
/// than once is harmless, later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
