//! Turns a directory of documents into a scoring corpus.

pub mod corpus;
pub mod discover;
pub mod extract;

use serde::{Deserialize, Serialize};

pub use corpus::{build_corpus, CorpusBuild};
pub use discover::list_documents;
pub use extract::{FileTextExtractor, TextExtractor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// File extensions to pick up, without the dot. Matched case-insensitively.
    pub extensions: Vec<String>,
    /// Extraction threads; `None` uses the global rayon pool, `Some(1)` runs inline.
    pub jobs: Option<usize>,
}

impl Default for SourceConfig {
    fn default() -> Self { Self { extensions: vec!["pdf".into()], jobs: None } }
}
