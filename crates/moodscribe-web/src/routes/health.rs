//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub analysis_service: bool,
}

/// GET /health - Report server status and the analysis service probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let analysis_service = state.analysis.health_check().await;

    Json(HealthResponse {
        status: "healthy",
        analysis_service,
    })
}
