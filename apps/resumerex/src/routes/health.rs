use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and which external services are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumerex",
        "llm_configured": state.config.gemini_api_key.is_some(),
        "search_configured": state.config.serpapi_api_key.is_some()
    }))
}
