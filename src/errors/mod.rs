// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod fetch;
mod pipeline;
mod processing;
mod store;

pub use config::{ConfigError, DatasetError};
pub use fetch::FetchError;
pub use pipeline::PipelineError;
pub use processing::ProcessingError;
pub use store::StoreError;
