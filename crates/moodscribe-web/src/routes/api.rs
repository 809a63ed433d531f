//! JSON analysis endpoint.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::state::AppState;
use moodscribe_core::journal::{self, JournalResult};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub entry: Option<String>,
}

/// POST /api/analyze - Analyze an entry and return the result record.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<JournalResult> {
    let result = journal::process_submission(state.analysis.as_ref(), req.entry.as_deref()).await;
    Json(result)
}
