// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete collaborators plugged into the pipeline core.
//!
//! * `http` - reqwest-backed fetcher
//! * `extract` - payload to text extractors
//! * `memory_store` / `json_store` - document stores
//! * `host` - sysinfo-backed host metrics
//! * `stub` - deterministic doubles for tests and dry runs

pub mod extract;
pub mod host;
pub mod http;
pub mod json_store;
pub mod memory_store;
pub mod stub;

pub use extract::{PlainTextExtractor, SimulatedPdfExtractor};
pub use host::SysinfoHostMetrics;
pub use http::HttpFetcher;
pub use json_store::JsonLinesStore;
pub use memory_store::InMemoryStore;
