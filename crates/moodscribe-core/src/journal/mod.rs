//! Journal submission processing.

pub mod model;

use async_trait::async_trait;
use tracing::warn;

use crate::error::MoodscribeResult;

pub use model::{Analysis, Entry, JournalResult, SubmissionPhase};

/// The external service that turns an entry into a summary and a
/// recommendation.
///
/// The HTTP client implements this; tests substitute a stub.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Analyze one entry. The entry text is forwarded verbatim.
    async fn analyze(&self, entry: &str) -> MoodscribeResult<Analysis>;

    /// Whether the service currently answers its health probe.
    async fn health_check(&self) -> bool {
        true
    }
}

/// Process one submitted form payload.
///
/// Missing or blank entries short-circuit locally without touching the
/// service. Every service failure is folded into the fixed fallback
/// result, so the caller always has a record to render.
pub async fn process_submission(
    service: &dyn AnalysisService,
    raw_entry: Option<&str>,
) -> JournalResult {
    let Some(entry) = Entry::from_raw(raw_entry) else {
        return JournalResult::no_entry();
    };

    match service.analyze(&entry.text).await {
        Ok(analysis) => JournalResult::from_analysis(entry.text, analysis),
        Err(e) => {
            warn!(error = %e, "Analysis request failed");
            JournalResult::service_failure(entry.text)
        }
    }
}
