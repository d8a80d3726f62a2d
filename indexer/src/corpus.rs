use rayon::prelude::*;
use scout_core::Corpus;
use std::path::{Path, PathBuf};

use crate::discover::list_documents;
use crate::extract::TextExtractor;
use crate::SourceConfig;

#[derive(Debug, Clone, Default)]
pub struct CorpusBuild {
    pub corpus: Corpus,
    /// Candidate files found on disk, usable or not.
    pub discovered: usize,
}

/// Discovers documents under `root` and extracts their text. Files that
/// yield no text are left out. The corpus keeps discovery order.
pub fn build_corpus<E: TextExtractor>(root: &Path, config: &SourceConfig, extractor: &E) -> CorpusBuild {
    let paths = list_documents(root, &config.extensions);
    let discovered = paths.len();
    let texts = extract_all(&paths, config.jobs, extractor);

    let mut corpus = Corpus::new();
    for (path, text) in paths.iter().zip(texts) {
        if !corpus.insert(path.to_string_lossy(), text) {
            tracing::debug!(path = %path.display(), "skipping document without text");
        }
    }
    tracing::info!(discovered, usable = corpus.len(), "corpus built");
    CorpusBuild { corpus, discovered }
}

fn extract_all<E: TextExtractor>(paths: &[PathBuf], jobs: Option<usize>, extractor: &E) -> Vec<String> {
    match jobs {
        Some(0) | Some(1) => paths.iter().map(|p| extractor.extract_text(p)).collect(),
        None => paths.par_iter().map(|p| extractor.extract_text(p)).collect(),
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| paths.par_iter().map(|p| extractor.extract_text(p)).collect()),
            Err(err) => {
                tracing::warn!(error = %err, "could not start extraction pool, extracting inline");
                paths.iter().map(|p| extractor.extract_text(p)).collect()
            }
        },
    }
}
