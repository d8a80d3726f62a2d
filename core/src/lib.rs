//! Local topic ranking with an online fallback signal.

pub mod config;
pub mod fallback;
pub mod index;
pub mod present;
pub mod scorer;
pub mod search;
pub mod tokenizer;

pub use config::{DisplayConfig, FallbackConfig, ScoringConfig};
pub use fallback::{FallbackDecision, FallbackPolicy, FallbackReason};
pub use index::{Corpus, CorpusIndex, Document, IdfTable};
pub use present::DisplayHit;
pub use scorer::{DocumentScore, Scorer};
pub use search::{ScholarResult, WebSearchClient};
