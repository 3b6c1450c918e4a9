// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Seams between the pipeline core and the outside world.

pub mod extractor;
pub mod fetcher;
pub mod host_metrics;
pub mod store;

pub use extractor::TextExtractor;
pub use fetcher::Fetcher;
pub use host_metrics::{HostMetrics, HostSnapshot, MemoryStats};
pub use store::DocumentStore;
