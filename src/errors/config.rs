// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading or validating the pipeline configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors reading the dataset file. The public loader turns these into an
/// empty dataset, so they only ever reach the log.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset root must be an object of key -> url")]
    NotAnObject,

    #[error("dataset entry '{key}' does not map to a string locator")]
    NonStringLocator { key: String },
}
