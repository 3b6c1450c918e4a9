// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Turns a fetched payload into plain text.
///
/// Returning `None` (or an empty string) marks the document as having no
/// extractable text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, raw: &[u8]) -> Option<String>;

    fn name(&self) -> &'static str;
}
