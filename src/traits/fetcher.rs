// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::FetchError;

/// Retrieves the raw bytes behind a locator.
///
/// Implementations must be shareable across worker tasks. A fetch that never
/// returns holds its worker slot indefinitely; no timeout is imposed here.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError>;

    fn name(&self) -> &'static str;
}
