use std::sync::Arc;

use crate::config::Config;
use crate::jobs::search::JobSearchService;
use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable clients; no per-request state survives a request.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextCompletion>,
    pub job_search: JobSearchService,
    pub config: Config,
}
