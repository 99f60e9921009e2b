//! CLI interface for wordtally

use crate::config::OutputFormat;
use crate::error::{Result, WordTallyError};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wordtally")]
#[command(about = "Word and punctuation frequency statistics for documents")]
#[command(long_about = "Extract the text of a TXT, DOCX or PDF file and report unique words, repeated words and punctuation usage")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a document
    Analyze {
        /// Path to the document (TXT, DOCX, PDF); prompted for when omitted
        file: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show at most N repeated words on the console
        #[arg(short, long)]
        top: Option<usize>,

        /// Count every word, ignoring the stop-word list
        #[arg(long, conflicts_with = "stop_words")]
        no_stop_words: bool,

        /// Read the stop-word list from a file instead of the configuration
        #[arg(long)]
        stop_words: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// List supported document formats
    Formats,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Ask for a document path on the terminal
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "Please enter the file path: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_path_input(&line)
}

/// Trim whitespace and the quotes file managers add when copying a path
pub fn parse_path_input(line: &str) -> Result<PathBuf> {
    let trimmed = line.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    if trimmed.is_empty() {
        return Err(WordTallyError::InvalidInput("No file path given".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::parse_from(["wordtally", "analyze", "notes.txt", "-o", "json", "--top", "5"]);
        match cli.command {
            Commands::Analyze { file, output, top, no_stop_words, .. } => {
                assert_eq!(file, Some(PathBuf::from("notes.txt")));
                assert_eq!(output.as_deref(), Some("json"));
                assert_eq!(top, Some(5));
                assert!(!no_stop_words);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_prompt_strips_quotes() {
        let mut input = Cursor::new("  \"C:\\Users\\ali\\Desktop\\example_file.txt\"\r\n");
        let mut output = Vec::new();

        let path = prompt_for_path(&mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("C:\\Users\\ali\\Desktop\\example_file.txt"));
        assert!(String::from_utf8(output).unwrap().contains("file path"));
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let err = parse_path_input("   \n").unwrap_err();
        assert!(matches!(err, WordTallyError::InvalidInput(_)));
    }
}
