// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default number of documents processed concurrently
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;
/// Default number of keywords kept per document
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;
/// Default dataset file, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "dataset.json";
/// Terms preferred over raw frequency when picking keywords
pub const DEFAULT_VOCABULARY: &[&str] = &["technology", "innovation", "ai", "development", "research"];
