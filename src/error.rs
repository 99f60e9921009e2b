//! Error handling for wordtally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordTallyError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl WordTallyError {
    /// Short label for the error kind, used when reporting to the user
    pub fn kind(&self) -> &'static str {
        match self {
            WordTallyError::NotFound(_) => "not found",
            WordTallyError::UnsupportedFormat(_) => "unsupported format",
            WordTallyError::CorruptDocument(_) => "corrupt document",
            WordTallyError::Io(_) => "io failure",
            WordTallyError::Configuration(_) => "configuration",
            WordTallyError::InvalidInput(_) => "invalid input",
            WordTallyError::Serialization(_) => "serialization",
            WordTallyError::OutputFormatting(_) => "output",
        }
    }
}

pub type Result<T> = std::result::Result<T, WordTallyError>;

/// Convert TOML parse errors to our custom error type
impl From<toml::de::Error> for WordTallyError {
    fn from(err: toml::de::Error) -> Self {
        WordTallyError::Configuration(format!("Failed to parse config: {}", err))
    }
}
