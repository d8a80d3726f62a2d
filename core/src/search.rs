use serde::{Deserialize, Serialize};
use std::future::Future;

/// One online search hit. Treated as opaque by the ranking code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScholarResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// External search used when local results are not good enough.
///
/// Implementations report failures by returning an empty list.
pub trait WebSearchClient {
    fn search(&self, query: &str) -> impl Future<Output = Vec<ScholarResult>> + Send;
}
