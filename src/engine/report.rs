// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::time::Duration;

use crate::engine::record::ProcessedRecord;
use crate::errors::{ProcessingError, StoreError};
use crate::traits::MemoryStats;

/// Aggregate figures for one pipeline run. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    /// Dataset size, regardless of how many entries succeeded.
    pub total_documents: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub duration: Duration,
    pub cpu_percent: f32,
    pub memory: MemoryStats,
}

impl Display for PerformanceReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance Report:")?;
        writeln!(f, "Total documents processed: {}", self.total_documents)?;
        writeln!(f, "Succeeded: {}", self.succeeded)?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f, "Processing duration: {:.2} seconds", self.duration.as_secs_f64())?;
        writeln!(f, "CPU usage: {:.1}%", self.cpu_percent)?;
        writeln!(f, "Memory usage: {:.1}%", self.memory.percent_used())?;
        writeln!(f, "Available memory: {:.2} MB", self.memory.available_mb())?;
        writeln!(f, "Used memory: {:.2} MB", self.memory.used_mb())?;
        writeln!(f, "Total memory: {:.2} MB", self.memory.total_mb())
    }
}

/// What happened to one dispatched dataset entry.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub pdf_key: String,
    pub url: String,
    pub result: Result<(), ProcessingError>,
}

impl DocumentOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&ProcessingError> {
        self.result.as_ref().err()
    }
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct PipelineRun {
    pub report: PerformanceReport,
    /// One entry per dataset entry, in dataset order.
    pub outcomes: Vec<DocumentOutcome>,
    /// Full read-back of the store after the run, or why it failed.
    pub records: Result<Vec<ProcessedRecord>, StoreError>,
}

impl PipelineRun {
    pub fn failures(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Write the performance report followed by the stored-record listing.
    ///
    /// The report is always written. The listing is skipped when the store
    /// could not be read back; callers surface that error from
    /// [`PipelineRun::records`].
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        write!(out, "{}", self.report)?;
        writeln!(out)?;
        let Ok(records) = &self.records else {
            return out.flush();
        };
        for record in records {
            writeln!(
                out,
                "PDF Key: {}, Summary: {}, Keywords: {:?}",
                record.pdf_key, record.summary, record.keywords
            )?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> PerformanceReport {
        PerformanceReport {
            total_documents: 2,
            succeeded: 1,
            failed: 1,
            duration: Duration::from_millis(1234),
            cpu_percent: 12.5,
            memory: MemoryStats {
                used_bytes: 3 * 1024 * 1024 * 1024,
                available_bytes: 4 * 1024 * 1024 * 1024,
                total_bytes: 8 * 1024 * 1024 * 1024,
            },
        }
    }

    #[test]
    fn test_report_format() {
        let text = report().to_string();
        assert_eq!(
            text,
            "Performance Report:\n\
             Total documents processed: 2\n\
             Succeeded: 1\n\
             Failed: 1\n\
             Processing duration: 1.23 seconds\n\
             CPU usage: 12.5%\n\
             Memory usage: 50.0%\n\
             Available memory: 4096.00 MB\n\
             Used memory: 3072.00 MB\n\
             Total memory: 8192.00 MB\n"
        );
    }

    #[test]
    fn test_listing_follows_report() {
        let run = PipelineRun {
            report: report(),
            outcomes: vec![],
            records: Ok(vec![ProcessedRecord {
                pdf_key: "doc1".to_string(),
                url: "https://example.com/doc1.pdf".to_string(),
                summary: "First sentence.".to_string(),
                keywords: vec!["first".to_string(), "sentence".to_string()],
                text_excerpt: "First sentence.".to_string(),
            }]),
        };

        let mut out = Vec::new();
        run.write_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\nPerformance Report:\n"));
        assert!(text.ends_with(
            "\nPDF Key: doc1, Summary: First sentence., Keywords: [\"first\", \"sentence\"]\n"
        ));
    }

    #[test]
    fn test_report_written_without_listing_when_read_back_failed() {
        let run = PipelineRun {
            report: report(),
            outcomes: vec![],
            records: Err(StoreError::Io(io::Error::new(
                io::ErrorKind::Other,
                "read-back broke",
            ))),
        };

        let mut out = Vec::new();
        run.write_report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, format!("\n{}\n", report()));
        assert!(!text.contains("PDF Key:"));
    }
}
