//! Journal form route handlers.
//!
//! Renders the entry form and handles standard form submissions.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::state::AppState;
use moodscribe_core::journal::{self, JournalResult, SubmissionPhase};

#[derive(Template)]
#[template(path = "journal.html")]
struct JournalTemplate {
    entry_value: String,
    result: Option<ResultView>,
}

/// View model for a completed submission.
struct ResultView {
    summary: String,
    recommendation: String,
    clipboard_text: String,
}

impl ResultView {
    fn from_result(result: &JournalResult) -> Self {
        Self {
            summary: result.summary.clone().unwrap_or_default(),
            recommendation: result.recommendation.clone().unwrap_or_default(),
            clipboard_text: result.clipboard_text(),
        }
    }
}

impl JournalTemplate {
    fn from_phase(phase: &SubmissionPhase) -> Self {
        let result = phase.result();
        Self {
            entry_value: result.map(|r| r.original.clone()).unwrap_or_default(),
            result: result.map(ResultView::from_result),
        }
    }
}

#[derive(Deserialize)]
pub struct EntryForm {
    pub entry: Option<String>,
}

/// GET / - Render the empty journal form.
pub async fn index() -> Response {
    render(&SubmissionPhase::Idle)
}

/// POST / - Process a submission and render the page with its result.
pub async fn submit(State(state): State<AppState>, Form(form): Form<EntryForm>) -> Response {
    let result = journal::process_submission(state.analysis.as_ref(), form.entry.as_deref()).await;
    render(&SubmissionPhase::Completed(result))
}

fn render(phase: &SubmissionPhase) -> Response {
    let template = JournalTemplate::from_phase(phase);
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}
