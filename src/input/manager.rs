//! Input manager dispatching extraction by document format

use crate::error::{Result, WordTallyError};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor, WordPackageExtractor};
use log::info;
use std::path::Path;

#[derive(Default)]
pub struct InputManager {
    plain_text: PlainTextExtractor,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `label` as the code page for `.txt` files that are not UTF-8
    pub fn with_fallback_encoding(mut self, label: &str) -> Result<Self> {
        self.plain_text = PlainTextExtractor::with_fallback_encoding(label)?;
        Ok(self)
    }

    pub fn detect_format(&self, path: &Path) -> Result<DocumentFormat> {
        DocumentFormat::from_path(path)
    }

    /// Detect the format of `path` and extract its text
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let format = self.detect_format(path)?;
        self.extract(path, format).await
    }

    pub async fn extract(&self, path: &Path, format: DocumentFormat) -> Result<String> {
        if !path.exists() {
            return Err(WordTallyError::NotFound(
                format!("File does not exist: {}", path.display())
            ));
        }

        let text = match format {
            DocumentFormat::PlainText => {
                info!("Reading plain text file: {}", path.display());
                self.plain_text.extract(path).await?
            },
            DocumentFormat::WordPackage => {
                info!("Extracting text from Word document: {}", path.display());
                WordPackageExtractor.extract(path).await?
            },
            DocumentFormat::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
        };

        Ok(text)
    }
}
