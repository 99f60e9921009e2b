//! Report structures wrapping an analysis result with run metadata

use crate::input::DocumentFormat;
use crate::processing::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub file_path: String,
    pub format: DocumentFormat,
    /// Characters in the extracted text
    pub character_count: usize,
    pub stop_word_count: usize,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub version: String,
}

impl ReportMetadata {
    pub fn new(file_path: impl Into<String>, format: DocumentFormat, text: &str, stop_word_count: usize) -> Self {
        Self {
            file_path: file_path.into(),
            format,
            character_count: text.chars().count(),
            stop_word_count,
            generated_at: Utc::now(),
            processing_time_ms: 0,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn with_processing_time(mut self, processing_time_ms: u64) -> Self {
        self.processing_time_ms = processing_time_ms;
        self
    }
}

impl AnalysisReport {
    pub fn new(metadata: ReportMetadata, result: AnalysisResult) -> Self {
        Self { metadata, result }
    }
}
