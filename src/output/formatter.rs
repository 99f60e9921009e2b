//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::{Result, WordTallyError};
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    top: usize,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, top: usize) -> Self {
        Self { use_colors, top }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let metadata = &report.metadata;
        let result = &report.result;

        output.push_str(&self.format_header("WORD & PUNCTUATION STATISTICS", 1));
        output.push_str(&format!("File: {} ({})\n", metadata.file_path, metadata.format));
        output.push_str(&format!("Generated: {} | Processing time: {}ms\n",
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("Unique words: {}\n",
            self.colorize(&result.unique_word_count.to_string(), Color::Cyan)
        ));
        output.push_str(&format!("Words counted: {} ({} stop-words excluded)\n",
            result.total_words,
            result.excluded_words
        ));
        output.push_str(&format!("Characters: {}\n", metadata.character_count));

        output.push_str(&self.format_header("Repeated words", 2));
        if result.repeated_words.is_empty() {
            output.push_str("  (none)\n");
        } else {
            let shown = if self.top == 0 { result.repeated_words.len() } else { self.top };
            for word in result.repeated_words.iter().take(shown) {
                output.push_str(&format!("  • {}: {}\n", self.colorize(&word.word, Color::Green), word.count));
            }
            if result.repeated_words.len() > shown {
                output.push_str(&format!("  … and {} more\n", result.repeated_words.len() - shown));
            }
        }

        output.push_str(&self.format_header("Punctuation marks", 2));
        if result.punctuation.is_empty() {
            output.push_str("  (none)\n");
        } else {
            for mark in &result.punctuation {
                output.push_str(&format!("  • '{}': {}\n", self.colorize(&mark.mark.to_string(), Color::Yellow), mark.count));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, 0),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, top: usize, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, top),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }

    /// Write a rendered report to disk, creating parent directories
    pub fn save_report(&self, content: &str, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            WordTallyError::OutputFormatting(format!("Failed to save report to {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DocumentFormat;
    use crate::output::report::ReportMetadata;
    use crate::processing::{StopWords, TextAnalyzer};

    fn sample_report() -> AnalysisReport {
        let text = "Kitap, kitap; kalem kalem kalem. Defter!";
        let result = TextAnalyzer::new(StopWords::empty()).analyze(text);
        let metadata = ReportMetadata::new("notes.txt", DocumentFormat::PlainText, text, 0);
        AnalysisReport::new(metadata, result)
    }

    #[test]
    fn test_console_lists_tables_in_order() {
        let formatter = ConsoleFormatter::new(false, 0);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Unique words: 3"));
        let kalem = output.find("• kalem: 3").unwrap();
        let kitap = output.find("• kitap: 2").unwrap();
        assert!(kalem < kitap);
        assert!(!output.contains("defter:"));
        assert!(output.contains("• '!': 1"));
        assert!(output.contains("• ',': 1"));
    }

    #[test]
    fn test_console_top_limits_repeated_words() {
        let formatter = ConsoleFormatter::new(false, 1);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("• kalem: 3"));
        assert!(!output.contains("• kitap: 2"));
        assert!(output.contains("and 1 more"));
    }

    #[test]
    fn test_json_contains_tables() {
        let generator = ReportGenerator::with_options(false, 0, false);
        let json = generator.generate_report(&sample_report(), &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["result"]["unique_word_count"], 3);
        assert_eq!(value["result"]["repeated_words"][0]["word"], "kalem");
        assert_eq!(value["result"]["punctuation"][0]["mark"], ",");
        assert_eq!(value["metadata"]["format"], "PlainText");
    }

    #[test]
    fn test_save_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.txt");

        ReportGenerator::new().save_report("hello", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }
}
