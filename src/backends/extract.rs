// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::TextExtractor;

/// Decodes the payload as UTF-8 (lossily) and trims it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, raw: &[u8]) -> Option<String> {
        let text = String::from_utf8_lossy(raw);
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}

/// Fixed text returned for every non-empty payload.
pub const SIMULATED_TEXT: &str = "Simulated PDF content for testing. This is the second sentence. This is the third sentence. This is the fourth sentence.";

/// Stand-in for a real PDF text extractor: ignores the payload contents and
/// returns [`SIMULATED_TEXT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPdfExtractor;

impl TextExtractor for SimulatedPdfExtractor {
    fn extract(&self, raw: &[u8]) -> Option<String> {
        if raw.is_empty() {
            return None;
        }
        Some(SIMULATED_TEXT.to_string())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_trims_and_rejects_blank() {
        assert_eq!(
            PlainTextExtractor.extract(b"  Hello there.\n"),
            Some("Hello there.".to_string())
        );
        assert_eq!(PlainTextExtractor.extract(b" \n\t "), None);
        assert_eq!(PlainTextExtractor.extract(b""), None);
    }

    #[test]
    fn test_plain_text_replaces_invalid_utf8() {
        let text = PlainTextExtractor.extract(&[b'a', 0xff, b'b']).unwrap();
        assert_eq!(text, "a\u{fffd}b");
    }

    #[test]
    fn test_simulated_ignores_payload() {
        assert_eq!(
            SimulatedPdfExtractor.extract(b"%PDF-1.7 ..."),
            Some(SIMULATED_TEXT.to_string())
        );
        assert_eq!(SimulatedPdfExtractor.extract(b""), None);
    }
}
