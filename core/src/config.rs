use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::tokenizer::DEFAULT_STOP_WORDS;

pub const DEFAULT_PHRASE_BONUS: f64 = 100.0;
pub const DEFAULT_MIN_PHRASE_LEN: usize = 5;
pub const DEFAULT_MIN_RESULTS: usize = 5;
pub const DEFAULT_MIN_TOP_SCORE: f64 = 0.5;
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub stop_words: Vec<String>,
    /// Added once when the whole query occurs verbatim in a document.
    pub phrase_bonus: f64,
    /// The query must be strictly longer than this (in characters) to earn the bonus.
    pub min_phrase_len: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            phrase_bonus: DEFAULT_PHRASE_BONUS,
            min_phrase_len: DEFAULT_MIN_PHRASE_LEN,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.phrase_bonus.is_finite() || self.phrase_bonus < 0.0 {
            bail!("phrase_bonus must be a finite, non-negative number (got {})", self.phrase_bonus);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Fewer ranked documents than this triggers the fallback.
    pub min_results: usize,
    /// A top raw score below this triggers the fallback.
    pub min_top_score: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { min_results: DEFAULT_MIN_RESULTS, min_top_score: DEFAULT_MIN_TOP_SCORE }
    }
}

impl FallbackConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_top_score.is_finite() {
            bail!("min_top_score must be finite (got {})", self.min_top_score);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub top_n: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self { Self { top_n: DEFAULT_TOP_N } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let s = ScoringConfig::default();
        assert_eq!(s.phrase_bonus, 100.0);
        assert_eq!(s.min_phrase_len, 5);
        assert_eq!(s.stop_words.len(), DEFAULT_STOP_WORDS.len());
        let f = FallbackConfig::default();
        assert_eq!(f.min_results, 5);
        assert_eq!(f.min_top_score, 0.5);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let f: FallbackConfig = serde_json::from_str(r#"{"min_top_score": 1.25}"#).unwrap();
        assert_eq!(f.min_top_score, 1.25);
        assert_eq!(f.min_results, 5);
    }

    #[test]
    fn rejects_bad_values() {
        let s = ScoringConfig { phrase_bonus: f64::NAN, ..Default::default() };
        assert!(s.validate().is_err());
        let s = ScoringConfig { phrase_bonus: -1.0, ..Default::default() };
        assert!(s.validate().is_err());
        let f = FallbackConfig { min_top_score: f64::INFINITY, ..Default::default() };
        assert!(f.validate().is_err());
        assert!(FallbackConfig::default().validate().is_ok());
    }
}
