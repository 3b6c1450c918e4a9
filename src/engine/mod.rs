// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod coordinator;
pub mod document;
pub mod factory;
pub mod record;
pub mod report;

pub use coordinator::PipelineCoordinator;
pub use document::{AnalysisOptions, DocumentProcessor};
pub use factory::PipelineFactory;
pub use record::{Dataset, DatasetEntry, ProcessedRecord};
pub use report::{DocumentOutcome, PerformanceReport, PipelineRun};
