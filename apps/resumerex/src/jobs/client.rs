//! Job-search API client. Callers depend on the `JobSearch` trait;
//! `SerpApiClient` is the production adapter for SerpApi's `google_jobs` engine.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::jobs::posting::RawPosting;

/// SerpApi reports "no results" through its `error` field; that is not a failure.
const NO_RESULTS_MARKER: &str = "hasn't returned any results";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Job search is unavailable: SERPAPI_API_KEY is not configured")]
    SearchUnavailable,

    #[error("Job search failed: {0}")]
    SearchFailed(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::SearchFailed(err.to_string())
    }
}

#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Runs one query. An empty vector means the query legitimately matched nothing.
    async fn search_jobs(
        &self,
        query: &str,
        location: Option<&str>,
        count: usize,
    ) -> Result<Vec<RawPosting>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    jobs_results: Vec<RawPosting>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            api_key: config.serpapi_api_key.clone(),
            base_url: config.serpapi_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl JobSearch for SerpApiClient {
    async fn search_jobs(
        &self,
        query: &str,
        location: Option<&str>,
        count: usize,
    ) -> Result<Vec<RawPosting>, SearchError> {
        // Checked before any network call.
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SearchError::SearchUnavailable)?;

        let num = count.to_string();
        let mut params = vec![
            ("engine", "google_jobs"),
            ("q", query),
            ("hl", "en"),
            ("num", num.as_str()),
            ("api_key", api_key),
        ];
        if let Some(location) = location {
            params.push(("location", location));
        }

        info!("Searching jobs: q={query:?} location={location:?} num={count}");
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: SerpApiResponse = serde_json::from_str(&body).map_err(|e| {
            SearchError::SearchFailed(format!("unexpected response (status {status}): {e}"))
        })?;

        if let Some(error) = parsed.error {
            if error.contains(NO_RESULTS_MARKER) {
                debug!("Search returned no results: {error}");
                return Ok(vec![]);
            }
            return Err(SearchError::SearchFailed(error));
        }
        if !status.is_success() {
            return Err(SearchError::SearchFailed(format!("HTTP status {status}")));
        }

        debug!("Search returned {} raw postings", parsed.jobs_results.len());
        Ok(parsed.jobs_results)
    }
}
