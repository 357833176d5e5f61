//! Job search pipeline: query → API call → normalize → score → rank → truncate.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::jobs::client::{JobSearch, SearchError};
use crate::jobs::posting::JobPosting;
use crate::jobs::query::{build_query, normalize_location, SearchMode};
use crate::resume::keywords::KeywordList;

/// The job-search API never returns more than this per request.
pub const MAX_API_RESULTS: usize = 50;

pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_MAX_JOBS: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub keywords: KeywordList,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_max_jobs")]
    pub max_jobs: usize,
    #[serde(default)]
    pub search_mode: SearchMode,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_max_jobs() -> usize {
    DEFAULT_MAX_JOBS
}

/// Ranked postings for one search. Never cached or merged across searches.
#[derive(Debug, Clone, Serialize)]
pub struct JobResultSet {
    pub query: String,
    pub location: Option<String>,
    pub jobs: Vec<JobPosting>,
}

#[derive(Clone)]
pub struct JobSearchService {
    client: Arc<dyn JobSearch>,
    description_max_chars: usize,
    pause: Duration,
}

impl JobSearchService {
    pub fn new(client: Arc<dyn JobSearch>, config: &Config) -> Self {
        Self {
            client,
            description_max_chars: config.description_max_chars,
            pause: config.search_pause,
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<JobResultSet, SearchError> {
        let query = build_query(&request.keywords, request.search_mode);
        let location = normalize_location(&request.location);
        let requested = request.max_jobs.min(MAX_API_RESULTS);

        let raw = self
            .client
            .search_jobs(&query, location.as_deref(), requested)
            .await;
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
        let raw = raw?;

        let jobs = rank(
            raw.into_iter()
                .map(|r| JobPosting::from_raw(r, &request.keywords, self.description_max_chars))
                .collect(),
            request.max_jobs,
        );
        info!("Search {query:?} produced {} ranked jobs", jobs.len());

        Ok(JobResultSet {
            query,
            location,
            jobs,
        })
    }
}

/// Stable sort by descending relevance, then keep the first `max_jobs`.
pub fn rank(mut jobs: Vec<JobPosting>, max_jobs: usize) -> Vec<JobPosting> {
    jobs.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    jobs.truncate(max_jobs);
    jobs
}
