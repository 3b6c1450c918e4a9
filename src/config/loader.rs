// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_DATASET_PATH, DEFAULT_KEYWORD_LIMIT, DEFAULT_MAX_CONCURRENCY, DEFAULT_VOCABULARY,
};
use crate::engine::record::DEFAULT_EXCERPT_CHARS;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for a pipeline run.
///
/// Every field is optional; anything missing takes its default from
/// [`crate::config::consts`]. Typically loaded from a YAML or TOML file.
///
/// # Fields
/// * `dataset` - Path of the JSON dataset (`{"key": "url", ...}`)
/// * `max_concurrency` - Number of documents processed at once (must be > 0)
/// * `keyword_limit` - Maximum keywords kept per document
/// * `excerpt_chars` - Characters of extracted text stored on each record
/// * `vocabulary` - Terms preferred over raw frequency for keywords
/// * `extractor` - How fetched bytes become text
/// * `store` - Where records are persisted
///
/// # Example
/// ```yaml
/// dataset: data/dataset.json
/// max_concurrency: 5
/// keyword_limit: 5
/// vocabulary: [technology, innovation, ai, development, research]
/// extractor: plain_text
/// store:
///   type: json_lines
///   path: out/records.jsonl
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: PathBuf,
    pub max_concurrency: usize,
    pub keyword_limit: usize,
    pub excerpt_chars: usize,
    pub vocabulary: Vec<String>,
    pub extractor: ExtractorKind,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            vocabulary: DEFAULT_VOCABULARY.iter().map(|t| t.to_string()).collect(),
            extractor: ExtractorKind::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if let StoreConfig::JsonLines { path } = &self.store {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "json_lines store requires a path".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Text extraction strategy.
///
/// # Variants
/// * `Simulated` - Fixed stand-in text for every non-empty payload (default)
/// * `PlainText` - Decode the payload as UTF-8 text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    #[default]
    Simulated,
    PlainText,
}

/// Document store backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Records live for the lifetime of the process
    #[default]
    Memory,
    /// Append-only JSON-lines file
    JsonLines { path: PathBuf },
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse config text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, format)
}

/// Load a config file and reject values the pipeline cannot run with.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}
