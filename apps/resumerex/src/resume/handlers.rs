//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::resume::loader::load_resume_bytes;
use crate::resume::pipeline::{analyze_resume, ResumeAnalysis};
use crate::state::AppState;

/// Upper bound on the keyword count a client may request.
pub const MAX_KEYWORD_COUNT: usize = 30;

/// POST /api/v1/resume/analyze
///
/// Multipart form: `resume` (PDF or TXT file), optional `keyword_count`.
/// Returns keywords, feedback, and the summary report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut keyword_count = state.config.keyword_count;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload = Some((file_name, bytes.to_vec()));
            }
            "keyword_count" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid keyword_count: {e}")))?;
                if !raw.trim().is_empty() {
                    keyword_count = parse_keyword_count(&raw)?;
                }
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    info!("Analyzing uploaded resume {file_name:?} ({} bytes)", bytes.len());

    let document = load_resume_bytes(&file_name, bytes).await?;
    let analysis = analyze_resume(state.llm.as_ref(), &document, keyword_count).await;

    Ok(Json(analysis))
}

fn parse_keyword_count(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_KEYWORD_COUNT).contains(&n) => Ok(n),
        _ => Err(AppError::Validation(format!(
            "keyword_count must be between 1 and {MAX_KEYWORD_COUNT}"
        ))),
    }
}
