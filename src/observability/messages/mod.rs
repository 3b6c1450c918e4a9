// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `engine` - pipeline run lifecycle
//! * `document` - per-document success and failure notices
//! * `dataset` - dataset and store loading
//!
//! # Usage Pattern
//!
//! ```rust
//! use pdf_digest::observability::messages::engine::PipelineStarted;
//!
//! let msg = PipelineStarted {
//!     document_count: 12,
//!     max_concurrency: 5,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod dataset;
pub mod document;
pub mod engine;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a single event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
