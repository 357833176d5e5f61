//! Axum route handlers for the Jobs API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::export::{jobs_to_csv, DEFAULT_EXPORT_FILE};
use crate::jobs::posting::JobPosting;
use crate::jobs::search::{JobResultSet, SearchRequest, MAX_API_RESULTS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub results: JobResultSet,
    /// Informational note when the search legitimately matched nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub jobs: Vec<JobPosting>,
}

/// POST /api/v1/jobs/search
///
/// Searches for postings matching the keyword list and returns them ranked.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    if request.keywords.is_empty() {
        return Err(AppError::Validation("keywords cannot be empty".to_string()));
    }
    if request.max_jobs == 0 || request.max_jobs > MAX_API_RESULTS {
        return Err(AppError::Validation(format!(
            "max_jobs must be between 1 and {MAX_API_RESULTS}"
        )));
    }

    let results = state.job_search.search(&request).await?;
    let message = results
        .jobs
        .is_empty()
        .then(|| "No jobs found. Try changing keywords or location.".to_string());

    Ok(Json(SearchResponse { results, message }))
}

/// POST /api/v1/jobs/export
///
/// Returns the given postings as a CSV attachment, or 204 when there is nothing to save.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    if request.jobs.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let csv = jobs_to_csv(&request.jobs)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DEFAULT_EXPORT_FILE}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
