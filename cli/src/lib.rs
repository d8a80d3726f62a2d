use anyhow::{Context, Result};
use indexer::{build_corpus, CorpusBuild, SourceConfig, TextExtractor};
use scholar::ScholarConfig;
use scout_core::present::{display_hits, truncate_chars};
use scout_core::{
    Corpus, DisplayConfig, DisplayHit, DocumentScore, FallbackConfig, FallbackDecision, FallbackPolicy,
    ScholarResult, Scorer, ScoringConfig, WebSearchClient,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Console snippet length for online results.
const SNIPPET_DISPLAY_CHARS: usize = 70;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub fallback: FallbackConfig,
    pub display: DisplayConfig,
    pub source: SourceConfig,
    pub scholar: ScholarConfig,
}

impl AppConfig {
    /// Reads a JSON config file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let buf = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let config: AppConfig =
            serde_json::from_str(&buf).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.fallback.validate()?;
        Ok(())
    }

    pub fn apply(&mut self, o: Overrides) {
        if let Some(t) = o.threshold {
            self.fallback.min_top_score = t;
        }
        if let Some(n) = o.min_results {
            self.fallback.min_results = n;
        }
        if let Some(n) = o.top {
            self.display.top_n = n;
        }
        if let Some(exts) = o.extensions {
            self.source.extensions = exts;
        }
        if o.jobs.is_some() {
            self.source.jobs = o.jobs;
        }
    }
}

/// Command-line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub threshold: Option<f64>,
    pub min_results: Option<usize>,
    pub top: Option<usize>,
    pub extensions: Option<Vec<String>>,
    pub jobs: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "results", rename_all = "snake_case")]
pub enum Outcome {
    Local(Vec<DisplayHit>),
    Online(Vec<ScholarResult>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub topic: String,
    pub root: String,
    pub discovered: usize,
    pub usable: usize,
    pub decision: FallbackDecision,
    pub outcome: Outcome,
}

/// Scores the corpus and applies the fallback policy.
pub fn rank_local(corpus: &Corpus, topic: &str, config: &AppConfig) -> (Vec<DocumentScore>, FallbackDecision) {
    let ranked = Scorer::new(config.scoring.clone()).score(corpus, topic);
    let decision = FallbackPolicy::new(config.fallback.clone()).decide(&ranked);
    (ranked, decision)
}

/// Discovery and extraction on the blocking pool. A panicking extractor
/// leaves an empty corpus.
async fn load_corpus<E>(root: &Path, source: &SourceConfig, extractor: &E) -> CorpusBuild
where
    E: TextExtractor + Clone + 'static,
{
    let (root, source, extractor) = (root.to_path_buf(), source.clone(), extractor.clone());
    match tokio::task::spawn_blocking(move || build_corpus(&root, &source, &extractor)).await {
        Ok(build) => build,
        Err(err) => {
            tracing::warn!(error = %err, "corpus build failed");
            CorpusBuild::default()
        }
    }
}

/// Full run: build the corpus under `root`, rank it, and query `web` only
/// when the local ranking is not good enough.
pub async fn run<E, W>(root: &Path, topic: &str, config: &AppConfig, extractor: &E, web: &W) -> Report
where
    E: TextExtractor + Clone + 'static,
    W: WebSearchClient,
{
    tracing::info!(topic, root = %root.display(), "starting search");
    let build = load_corpus(root, &config.source, extractor).await;
    let (ranked, decision) = rank_local(&build.corpus, topic, config);

    let outcome = if decision.needed {
        tracing::info!(reason = ?decision.reason, "local results insufficient, searching online");
        let mut online = web.search(topic).await;
        online.truncate(config.display.top_n);
        Outcome::Online(online)
    } else {
        Outcome::Local(display_hits(&ranked, config.display.top_n))
    };

    Report {
        topic: topic.to_string(),
        root: root.display().to_string(),
        discovered: build.discovered,
        usable: build.corpus.len(),
        decision,
        outcome,
    }
}

/// Human-readable report.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Topic: '{}'", report.topic);
    let _ = writeln!(out, "Found {} candidate documents in {}", report.discovered, report.root);
    let _ = writeln!(out, "Corpus built from {} usable documents.", report.usable);
    let _ = writeln!(out, "Top document raw score: {:.6}", report.decision.top_score);
    out.push('\n');

    match &report.outcome {
        Outcome::Local(hits) => {
            let _ = writeln!(out, "Local search yielded sufficient results. Skipping online search.");
            let _ = writeln!(out, "Top {} most relevant local documents:", hits.len());
            for hit in hits {
                let _ = writeln!(out, "{}. [{:.2}%] - {}", hit.rank, hit.percent, hit.name);
            }
        }
        Outcome::Online(results) if results.is_empty() => {
            let _ = writeln!(out, "Local search failed the quality check.");
            let _ = writeln!(out, "No online results found or fetching failed (check network/firewall).");
        }
        Outcome::Online(results) => {
            let _ = writeln!(out, "Local search failed the quality check.");
            let _ = writeln!(out, "Top {} online results (Google Scholar):", results.len());
            for (i, r) in results.iter().enumerate() {
                let _ = writeln!(out, "{}. Title: {}", i + 1, r.title);
                let _ = writeln!(out, "   URL: {}", r.url);
                let _ = writeln!(out, "   Snippet: {}", truncate_chars(&r.snippet, SNIPPET_DISPLAY_CHARS));
            }
        }
    }
    out
}
