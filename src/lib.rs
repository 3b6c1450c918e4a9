// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analysis;       // tokenizer, keywords, length buckets, summaries
pub mod backends;       // concrete fetch/extract/store/metrics collaborators
pub mod config;         // config file, dataset, runtime assembly
pub mod engine;         // document processor + pipeline coordinator
pub mod errors;         // error handling
pub mod observability;
pub mod traits;         // collaborator seams
