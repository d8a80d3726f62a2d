//! TF-IDF relevance scoring.
//!
//! For every document:
//!
//! ```text
//! score = (Σ_q (1 + ln tf(q)) · idf(q)  +  phrase_bonus?) / sqrt(max(1, |doc|))
//! ```
//!
//! The sum runs over query tokens in query order (repeated query words count
//! again) and skips terms the document does not contain. `phrase_bonus` is
//! added once when the case-folded query occurs verbatim in the case-folded
//! text and the query is longer than `min_phrase_len` characters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::ScoringConfig;
use crate::index::{Corpus, CorpusIndex, Document, IdfTable};
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScore {
    pub id: String,
    pub score: f64,
}

/// Damped term frequency; only meaningful for `tf_raw >= 1`.
#[inline]
pub fn saturate(tf_raw: u32) -> f64 { 1.0 + (tf_raw as f64).ln() }

pub fn term_frequencies(tokens: &[String]) -> HashMap<&str, u32> {
    let mut tf: HashMap<&str, u32> = HashMap::new();
    for t in tokens {
        *tf.entry(t.as_str()).or_insert(0) += 1;
    }
    tf
}

#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScoringConfig,
    tokenizer: Tokenizer,
}

impl Default for Scorer {
    fn default() -> Self { Self::new(ScoringConfig::default()) }
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        let tokenizer = Tokenizer::new(&config.stop_words);
        Self { config, tokenizer }
    }

    pub fn config(&self) -> &ScoringConfig { &self.config }
    pub fn tokenizer(&self) -> &Tokenizer { &self.tokenizer }

    /// Scores every document of `corpus` against `query`, best first. Equal
    /// scores keep corpus insertion order. An empty corpus yields no scores.
    pub fn score(&self, corpus: &Corpus, query: &str) -> Vec<DocumentScore> {
        if corpus.is_empty() {
            return Vec::new();
        }
        let index = CorpusIndex::build(corpus, &self.tokenizer);
        self.score_index(&index, query)
    }

    pub fn score_index(&self, index: &CorpusIndex<'_>, query: &str) -> Vec<DocumentScore> {
        if index.is_empty() {
            return Vec::new();
        }
        let query_terms = self.tokenizer.tokenize(query);
        let idf = index.idf_table(&query_terms);
        let phrase = self.phrase(query);
        tracing::debug!(
            docs = index.len(),
            query_terms = query_terms.len(),
            distinct_terms = idf.len(),
            phrase = phrase.is_some(),
            "scoring corpus"
        );

        let mut results: Vec<DocumentScore> = index
            .documents()
            .iter()
            .map(|doc| DocumentScore {
                id: doc.id.to_string(),
                score: self.score_document(doc, &query_terms, &idf, phrase.as_deref()),
            })
            .collect();
        // stable: ties keep corpus order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results
    }

    /// Sum of saturated TF times IDF over the query tokens, before the phrase
    /// bonus and length normalization.
    pub fn relevance_sum(&self, tokens: &[String], query_terms: &[String], idf: &IdfTable) -> f64 {
        let tf = term_frequencies(tokens);
        let mut sum = 0.0;
        for term in query_terms {
            match tf.get(term.as_str()) {
                Some(&tf_raw) if tf_raw > 0 => sum += saturate(tf_raw) * idf.get(term),
                _ => {}
            }
        }
        sum
    }

    fn score_document(
        &self,
        doc: &Document<'_>,
        query_terms: &[String],
        idf: &IdfTable,
        phrase: Option<&str>,
    ) -> f64 {
        let mut relevance = self.relevance_sum(&doc.tokens, query_terms, idf);
        if let Some(phrase) = phrase {
            if doc.text.to_ascii_lowercase().contains(phrase) {
                relevance += self.config.phrase_bonus;
            }
        }
        let len = doc.tokens.len().max(1) as f64;
        relevance / len.sqrt()
    }

    /// The case-folded query when it is long enough to earn the phrase bonus.
    fn phrase(&self, query: &str) -> Option<String> {
        (query.chars().count() > self.config.min_phrase_len).then(|| query.to_ascii_lowercase())
    }
}
