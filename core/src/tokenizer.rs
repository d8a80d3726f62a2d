use lazy_static::lazy_static;
use std::collections::HashSet;

/// Stop words dropped by the default tokenizer.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "a", "an", "in", "on", "of", "for", "with", "to", "is", "are", "was", "were",
];

lazy_static! {
    static ref DEFAULT_TOKENIZER: Tokenizer = Tokenizer::default();
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::new(DEFAULT_STOP_WORDS.iter().copied()) }
}

impl Tokenizer {
    /// Stop words are matched after normalization, so they are stored lowercased.
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = stop_words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .collect();
        Self { stop_words }
    }

    pub fn is_stop_word(&self, term: &str) -> bool { self.stop_words.contains(term) }

    /// Split on whitespace, ASCII-lowercase, strip everything that is not ASCII
    /// alphanumeric, then drop empties and stop words. Duplicates are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|word| {
                let term: String = word
                    .chars()
                    .filter(char::is_ascii_alphanumeric)
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                if term.is_empty() || self.is_stop_word(&term) { None } else { Some(term) }
            })
            .collect()
    }
}

/// Tokenize with the default stop-word set.
pub fn tokenize(text: &str) -> Vec<String> { DEFAULT_TOKENIZER.tokenize(text) }
