//! Application state.

use std::sync::Arc;

use moodscribe_core::journal::AnalysisService;

/// Application state shared across handlers.
///
/// Holds only the analysis service handle; each request is otherwise
/// independent and stateless.
#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<dyn AnalysisService>,
}

impl AppState {
    pub fn new(analysis: Arc<dyn AnalysisService>) -> Self {
        Self { analysis }
    }
}
