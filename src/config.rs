//! Configuration management for wordtally

use crate::error::{Result, WordTallyError};
use crate::input::text_extractor::DEFAULT_FALLBACK_ENCODING;
use crate::processing::analyzer::DEFAULT_PUNCTUATION;
use crate::processing::{StopWords, TextAnalyzer};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Words excluded from the unique and repeated word statistics
    pub stop_words: Vec<String>,
    /// Characters counted in the punctuation table
    pub punctuation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Code page for `.txt` files that are neither UTF-8 nor carry a BOM
    pub fallback_encoding: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    /// Maximum repeated words shown on the console, 0 for all
    pub top: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::default_words(),
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            fallback_encoding: DEFAULT_FALLBACK_ENCODING.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            top: 0,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default config is created with default values, or kept in
    /// memory when it cannot be written; a missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(WordTallyError::Configuration(
                        format!("Config file does not exist: {}", path.display())
                    ));
                }
                Self::load_from(path)
            }
            None => Self::load_or_create(&Self::config_path()),
        }
    }

    fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return Self::load_from(config_path);
        }

        let config = Self::default();
        if let Err(e) = config.save_to(config_path) {
            warn!("Could not write default config to {}: {}; using defaults", config_path.display(), e);
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| WordTallyError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("wordtally")
            .join("config.toml")
    }

    pub fn stop_words(&self) -> StopWords {
        StopWords::new(&self.analysis.stop_words)
    }

    /// Analyzer configured with this config's stop-words and punctuation class
    pub fn analyzer(&self) -> TextAnalyzer {
        TextAnalyzer::new(self.stop_words()).with_punctuation(&self.analysis.punctuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.top = 10;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\nstop_words = [\"ve\"]\npunctuation = \".,\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.analysis.stop_words, vec!["ve".to_string()]);
        assert_eq!(config.input, InputConfig::default());
        assert_eq!(config.output, OutputConfig::default());

        let result = config.analyzer().analyze("Ve kitap, kitap; ve.");
        assert_eq!(result.unique_word_count, 1);
        assert_eq!(result.punctuation_count(';'), None);
        assert_eq!(result.punctuation_count(','), Some(1));
    }

    #[test]
    fn test_default_config_is_created_on_first_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wordtally").join("config.toml");

        let config = Config::load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_config_location_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let path = blocker.join("config.toml");

        let config = Config::load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, WordTallyError::Configuration(_)));
    }

    #[test]
    fn test_invalid_toml_is_a_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, WordTallyError::Configuration(_)));
    }
}
