//! Word and punctuation frequency analysis

use crate::processing::stop_words::StopWords;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Sentence and clause marks, straight and curly quotes, parentheses
pub const DEFAULT_PUNCTUATION: &str = ".,;:!?()\"'\u{201C}\u{201D}\u{2018}\u{2019}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationCount {
    pub mark: char,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Distinct words after stop-word filtering
    pub unique_word_count: usize,
    /// Words occurring more than once, most frequent first
    pub repeated_words: Vec<WordCount>,
    /// Every punctuation mark found in the raw text, in first-seen order
    pub punctuation: Vec<PunctuationCount>,
    pub total_words: usize,
    pub excluded_words: usize,
}

impl AnalysisResult {
    pub fn repeated_count(&self, word: &str) -> Option<usize> {
        self.repeated_words.iter().find(|w| w.word == word).map(|w| w.count)
    }

    pub fn punctuation_count(&self, mark: char) -> Option<usize> {
        self.punctuation.iter().find(|p| p.mark == mark).map(|p| p.count)
    }
}

pub struct TextAnalyzer {
    stop_words: StopWords,
    punctuation: Vec<char>,
    separator_regex: Regex,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(StopWords::default_list())
    }
}

impl TextAnalyzer {
    pub fn new(stop_words: StopWords) -> Self {
        let separator_regex = Regex::new(r"\W+").expect("Invalid separator regex");

        Self {
            stop_words,
            punctuation: DEFAULT_PUNCTUATION.chars().collect(),
            separator_regex,
        }
    }

    /// Replace the set of characters counted as punctuation
    pub fn with_punctuation(mut self, marks: &str) -> Self {
        let mut punctuation: Vec<char> = Vec::new();
        for mark in marks.chars().filter(|c| !c.is_whitespace()) {
            if !punctuation.contains(&mark) {
                punctuation.push(mark);
            }
        }
        self.punctuation = punctuation;
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Lower-case and split on runs of non-word characters
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.separator_regex
            .split(&lowered)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = self.tokenize(text);

        let mut first_seen: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut excluded_words = 0;

        for token in &tokens {
            if self.stop_words.contains(token) {
                excluded_words += 1;
                continue;
            }
            match counts.entry(token.as_str()) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    first_seen.push(token.as_str());
                    entry.insert(1);
                }
            }
        }

        let mut repeated_words: Vec<WordCount> = first_seen
            .iter()
            .map(|word| WordCount { word: word.to_string(), count: counts[word] })
            .filter(|w| w.count > 1)
            .collect();
        // stable sort keeps first-seen order between equal counts
        repeated_words.sort_by(|a, b| b.count.cmp(&a.count));

        AnalysisResult {
            unique_word_count: first_seen.len(),
            repeated_words,
            punctuation: self.count_punctuation(text),
            total_words: tokens.len() - excluded_words,
            excluded_words,
        }
    }

    /// Count punctuation over the raw text, singletons included
    pub fn count_punctuation(&self, text: &str) -> Vec<PunctuationCount> {
        let mut marks: Vec<PunctuationCount> = Vec::new();

        for c in text.chars().filter(|c| self.punctuation.contains(c)) {
            match marks.iter_mut().find(|p| p.mark == c) {
                Some(existing) => existing.count += 1,
                None => marks.push(PunctuationCount { mark: c, count: 1 }),
            }
        }

        marks
    }
}
