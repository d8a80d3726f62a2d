//! Google Scholar lookup used when local documents are not enough.

pub mod parse;

use anyhow::{bail, Context, Result};
use reqwest::{header, Client};
use scout_core::{ScholarResult, WebSearchClient};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use url::Url;

pub use parse::parse_results;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScholarConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Snippets longer than this many characters are cut and end in `...`.
    pub snippet_chars: usize,
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            base_url: "https://scholar.google.com/".into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout_secs: 12,
            snippet_chars: 200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScholarClient {
    client: Client,
    base: Url,
    snippet_chars: usize,
}

impl ScholarClient {
    pub fn new(config: &ScholarConfig) -> Result<Self> {
        let mut base = Url::parse(&config.base_url)
            .with_context(|| format!("invalid scholar base url {:?}", config.base_url))?;
        // without a trailing slash, join() would replace the last segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static("en-US,en;q=0.9"));
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, base, snippet_chars: config.snippet_chars })
    }

    /// `{base}/scholar?q=<query>`
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.base.join("scholar")?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    async fn fetch_html(&self, url: Url) -> Result<String> {
        let resp = self.client.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            bail!("{url} answered {}", resp.status());
        }
        let body = resp.text().await?;
        if body.is_empty() {
            bail!("{url} returned an empty page");
        }
        Ok(body)
    }

    /// Like [`WebSearchClient::search`] but keeps the failure reason.
    pub async fn try_search(&self, query: &str) -> Result<Vec<ScholarResult>> {
        let url = self.search_url(query)?;
        tracing::info!(%url, "fetching scholar results");
        let html = self.fetch_html(url).await?;
        tracing::debug!(bytes = html.len(), head = %html.chars().take(500).collect::<String>(), "scholar page received");
        let results = parse_results(&html, &self.base, self.snippet_chars);
        tracing::info!(results = results.len(), "parsed scholar results");
        Ok(results)
    }
}

impl WebSearchClient for ScholarClient {
    fn search(&self, query: &str) -> impl Future<Output = Vec<ScholarResult>> + Send {
        let this = self.clone();
        let query = query.to_owned();
        async move {
            match this.try_search(&query).await {
                Ok(results) => results,
                Err(err) => {
                    tracing::warn!(error = %err, "scholar search failed");
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_query_url() {
        let c = ScholarClient::new(&ScholarConfig::default()).unwrap();
        let url = c.search_url("AI-Powered Social Media & Automation").unwrap();
        assert_eq!(url.path(), "/scholar");
        let q: Vec<_> = url.query_pairs().collect();
        assert_eq!(q[0].0, "q");
        assert_eq!(q[0].1, "AI-Powered Social Media & Automation");
        assert!(url.as_str().contains("q=AI-Powered+Social+Media+%26+Automation"));
    }

    #[test]
    fn base_path_is_kept() {
        for base in ["http://host/mirror", "http://host/mirror/"] {
            let cfg = ScholarConfig { base_url: base.into(), ..Default::default() };
            let url = ScholarClient::new(&cfg).unwrap().search_url("x").unwrap();
            assert_eq!(url.as_str(), "http://host/mirror/scholar?q=x");
        }
    }

    #[test]
    fn config_json_fills_defaults() {
        let cfg: ScholarConfig = serde_json::from_str(r#"{"base_url": "http://localhost:8000/"}"#).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:8000/");
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.timeout_secs, 12);
        assert_eq!(cfg.snippet_chars, 200);
    }

    #[test]
    fn rejects_bad_base_url() {
        let cfg = ScholarConfig { base_url: "not a url".into(), ..Default::default() };
        assert!(ScholarClient::new(&cfg).is_err());
    }
}
