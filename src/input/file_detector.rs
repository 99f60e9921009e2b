//! Document format detection

use crate::error::{Result, WordTallyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    PlainText,
    WordPackage,
    Pdf,
}

impl DocumentFormat {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 3] = ["txt", "docx", "pdf"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(DocumentFormat::PlainText),
            "docx" => Some(DocumentFormat::WordPackage),
            "pdf" => Some(DocumentFormat::Pdf),
            _ => None,
        }
    }

    /// Detect the format from the path's extension without touching the file
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| WordTallyError::UnsupportedFormat(
                format!("File has no extension: {}", path.display())
            ))?;

        Self::from_extension(extension).ok_or_else(|| WordTallyError::UnsupportedFormat(
            format!(
                "Unsupported file extension .{} for {}. Allowed: {}",
                extension,
                path.display(),
                Self::SUPPORTED_EXTENSIONS.join(", ")
            )
        ))
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "txt",
            DocumentFormat::WordPackage => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentFormat::PlainText => "Plain text",
            DocumentFormat::WordPackage => "Word document",
            DocumentFormat::Pdf => "PDF",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("TXT"), Some(DocumentFormat::PlainText));
        assert_eq!(DocumentFormat::from_extension("Docx"), Some(DocumentFormat::WordPackage));
        assert_eq!(DocumentFormat::from_extension("pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("md"), None);
    }

    #[test]
    fn test_from_path_rejects_unknown_extensions() {
        let err = DocumentFormat::from_path(Path::new("data/report.csv")).unwrap_err();
        assert!(matches!(err, WordTallyError::UnsupportedFormat(_)));

        let err = DocumentFormat::from_path(Path::new("README")).unwrap_err();
        assert!(matches!(err, WordTallyError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_from_path_does_not_require_existing_file() {
        let format = DocumentFormat::from_path(Path::new("/no/such/dir/notes.PDF")).unwrap();
        assert_eq!(format, DocumentFormat::Pdf);
    }
}
