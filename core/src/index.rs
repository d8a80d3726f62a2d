use std::collections::HashMap;

use crate::tokenizer::Tokenizer;

/// Document texts keyed by a unique identifier (usually a file path).
///
/// Insertion order is kept: it is the tie-break order for equal scores.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Adds a document. Empty text never enters the corpus and `false` is
    /// returned. Re-inserting an existing id replaces its text in place.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.is_empty() {
            return false;
        }
        let id = id.into();
        match self.positions.get(&id) {
            Some(&pos) => self.entries[pos].1 = text,
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, text));
            }
        }
        true
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.positions.get(id).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut corpus = Corpus::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}

#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub tokens: Vec<String>,
}

/// Tokenized view of a corpus. Each entry pairs the raw text with its tokens,
/// so the two can never disagree on which ids exist.
#[derive(Debug, Clone)]
pub struct CorpusIndex<'a> {
    docs: Vec<Document<'a>>,
}

impl<'a> CorpusIndex<'a> {
    pub fn build(corpus: &'a Corpus, tokenizer: &Tokenizer) -> Self {
        let docs = corpus
            .iter()
            .map(|(id, text)| Document { id, text, tokens: tokenizer.tokenize(text) })
            .collect();
        Self { docs }
    }

    pub fn documents(&self) -> &[Document<'a>] { &self.docs }
    pub fn len(&self) -> usize { self.docs.len() }
    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    /// Number of documents containing `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.docs.iter().filter(|d| d.tokens.iter().any(|t| t == term)).count()
    }

    /// `ln(N / (1 + df))`, unsmoothed and unclamped: a term present in every
    /// document gets a negative weight. Callers must not pass an empty index.
    pub fn idf(&self, term: &str) -> f64 {
        debug_assert!(!self.docs.is_empty(), "idf over an empty corpus");
        let n = self.docs.len() as f64;
        let df = self.document_frequency(term) as f64;
        (n / (1.0 + df)).ln()
    }

    /// IDF for each distinct term, computed once per term.
    pub fn idf_table<S: AsRef<str>>(&self, terms: &[S]) -> IdfTable {
        let mut table = IdfTable::default();
        for term in terms {
            let term = term.as_ref();
            if !table.weights.contains_key(term) {
                table.weights.insert(term.to_string(), self.idf(term));
            }
        }
        table
    }
}

/// Per-query IDF memo.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
}

impl IdfTable {
    /// Unknown terms weigh nothing.
    pub fn get(&self, term: &str) -> f64 { self.weights.get(term).copied().unwrap_or(0.0) }
    pub fn len(&self) -> usize { self.weights.len() }
    pub fn is_empty(&self) -> bool { self.weights.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        [
            ("a.pdf", "rust systems rust"),
            ("b.pdf", "python scripting"),
            ("c.pdf", "rust memory safety"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut c = Corpus::new();
        assert!(!c.insert("x", ""));
        assert!(c.is_empty());
        assert!(c.get("x").is_none());
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut c = corpus();
        assert!(c.insert("a.pdf", "replaced"));
        assert_eq!(c.len(), 3);
        assert_eq!(c.iter().next(), Some(("a.pdf", "replaced")));
    }

    #[test]
    fn document_frequency_counts_presence() {
        let c = corpus();
        let idx = CorpusIndex::build(&c, &Tokenizer::default());
        assert_eq!(idx.document_frequency("rust"), 2);
        assert_eq!(idx.document_frequency("python"), 1);
        assert_eq!(idx.document_frequency("golang"), 0);
    }

    #[test]
    fn idf_values() {
        let c = corpus();
        let idx = CorpusIndex::build(&c, &Tokenizer::default());
        assert!((idx.idf("golang") - 3f64.ln()).abs() < 1e-12);
        assert!((idx.idf("python") - 1.5f64.ln()).abs() < 1e-12);
        assert_eq!(idx.idf("rust"), 0.0);
    }

    #[test]
    fn idf_table_memoizes_distinct_terms() {
        let c = corpus();
        let idx = CorpusIndex::build(&c, &Tokenizer::default());
        let table = idx.idf_table(&["rust", "rust", "python"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("missing"), 0.0);
    }
}
