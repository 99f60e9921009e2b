//! Text analysis module
//! Tokenization, stop-word filtering and frequency statistics

pub mod analyzer;
pub mod stop_words;

pub use analyzer::{AnalysisResult, PunctuationCount, TextAnalyzer, WordCount};
pub use stop_words::StopWords;
