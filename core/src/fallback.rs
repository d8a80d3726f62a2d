use serde::{Deserialize, Serialize};

use crate::config::FallbackConfig;
use crate::scorer::DocumentScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    TooFewResults,
    LowTopScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackDecision {
    pub needed: bool,
    pub result_count: usize,
    /// Raw score of the best document, 0.0 when there is none.
    pub top_score: f64,
    pub reason: Option<FallbackReason>,
}

/// Raw score of the first ranked result, or 0.0 for an empty ranking.
pub fn top_score(results: &[DocumentScore]) -> f64 { results.first().map_or(0.0, |r| r.score) }

/// Decides whether a ranking is good enough or an online search is required.
#[derive(Debug, Clone, Default)]
pub struct FallbackPolicy {
    config: FallbackConfig,
}

impl FallbackPolicy {
    pub fn new(config: FallbackConfig) -> Self { Self { config } }

    pub fn config(&self) -> &FallbackConfig { &self.config }

    pub fn decide(&self, results: &[DocumentScore]) -> FallbackDecision {
        let result_count = results.len();
        let top_score = top_score(results);
        let reason = if result_count < self.config.min_results {
            Some(FallbackReason::TooFewResults)
        } else if top_score < self.config.min_top_score {
            Some(FallbackReason::LowTopScore)
        } else {
            None
        };
        tracing::debug!(
            top_score,
            threshold = self.config.min_top_score,
            result_count,
            fallback = reason.is_some(),
            "fallback decision"
        );
        FallbackDecision { needed: reason.is_some(), result_count, top_score, reason }
    }

    pub fn is_needed(&self, results: &[DocumentScore]) -> bool { self.decide(results).needed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(n: usize, top: f64) -> Vec<DocumentScore> {
        (0..n)
            .map(|i| DocumentScore { id: format!("doc{i}"), score: top - i as f64 * 0.01 })
            .collect()
    }

    #[test]
    fn too_few_results() {
        let d = FallbackPolicy::default().decide(&ranked(3, 0.9));
        assert!(d.needed);
        assert_eq!(d.reason, Some(FallbackReason::TooFewResults));
    }

    #[test]
    fn weak_top_score() {
        let d = FallbackPolicy::default().decide(&ranked(6, 0.3));
        assert!(d.needed);
        assert_eq!(d.reason, Some(FallbackReason::LowTopScore));
    }

    #[test]
    fn good_enough() {
        let d = FallbackPolicy::default().decide(&ranked(6, 0.7));
        assert!(!d.needed);
        assert_eq!(d.reason, None);
        assert_eq!(d.top_score, 0.7);
    }

    #[test]
    fn empty_ranking() {
        let d = FallbackPolicy::default().decide(&[]);
        assert!(d.needed);
        assert_eq!(d.top_score, 0.0);
        assert_eq!(d.result_count, 0);
    }

    #[test]
    fn threshold_is_strict_lower_bound() {
        assert!(!FallbackPolicy::default().is_needed(&ranked(5, 0.5)));
    }

    #[test]
    fn substituted_threshold() {
        let policy = FallbackPolicy::new(FallbackConfig { min_results: 1, min_top_score: 0.1 });
        assert!(!policy.is_needed(&ranked(2, 0.3)));
        assert!(policy.is_needed(&ranked(2, 0.05)));
    }
}
