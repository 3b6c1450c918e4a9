// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dataset;
mod loader;
mod runtime;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use dataset::{load_dataset, parse_dataset, try_load_dataset};
pub use loader::{
    load_and_validate_config, load_config, parse_config, Config, ConfigFormat, ExtractorKind,
    StoreConfig,
};
pub use runtime::RuntimeBuilder;
