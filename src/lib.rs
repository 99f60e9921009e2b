//! wordtally library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, WordTallyError};
pub use config::Config;

use input::InputManager;
use output::{AnalysisReport, ReportMetadata};
use processing::TextAnalyzer;
use std::path::Path;
use std::time::Instant;

/// Detect, extract and analyze one document.
///
/// Extraction errors are returned before any analysis happens.
pub async fn analyze_document(
    path: &Path,
    input_manager: &InputManager,
    analyzer: &TextAnalyzer,
) -> Result<AnalysisReport> {
    let started = Instant::now();

    let format = input_manager.detect_format(path)?;
    let text = input_manager.extract(path, format).await?;
    log::debug!("Extracted {} characters from {}", text.len(), path.display());

    let result = analyzer.analyze(&text);
    let metadata = ReportMetadata::new(
        path.display().to_string(),
        format,
        &text,
        analyzer.stop_words().len(),
    )
    .with_processing_time(started.elapsed().as_millis() as u64);

    Ok(AnalysisReport::new(metadata, result))
}
