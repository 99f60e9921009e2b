//! Stop-word exclusion set

use crate::error::{Result, WordTallyError};
use std::collections::HashSet;
use std::path::Path;

/// Connectors and fillers excluded by default (Turkish and English)
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // Turkish
    "ve", "veya", "ya", "ile", "ama", "fakat", "ancak", "lakin", "çünkü", "ki",
    "de", "da", "ise", "hem", "ne", "mi", "mı", "mu", "mü", "bu", "şu", "o",
    "bir", "için", "gibi", "kadar", "daha", "çok", "en", "yani", "eğer", "hatta",
    "ayrıca", "sonra", "önce", "diye", "olarak",
    // English
    "the", "an", "and", "or", "but", "nor", "so", "yet", "of", "to", "in", "on",
    "at", "by", "for", "with", "as", "is", "are", "be", "it", "that", "this",
];

/// Every single letter of the Turkish and English alphabets is a stop-word
const SINGLE_LETTERS: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from arbitrary words; entries are trimmed and lower-cased
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in list
    pub fn default_list() -> Self {
        Self::new(Self::default_words())
    }

    pub fn default_words() -> Vec<String> {
        DEFAULT_STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .chain(SINGLE_LETTERS.chars().map(|c| c.to_string()))
            .collect()
    }

    /// Load a whitespace separated list; `#` starts a comment that runs to end of line
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => WordTallyError::NotFound(
                format!("Stop-word file does not exist: {}", path.display())
            ),
            _ => WordTallyError::Io(e),
        })?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(|line| line.split('#').next().unwrap_or(""))
                .flat_map(str::split_whitespace),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
