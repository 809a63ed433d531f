//! HTTP client for the mood analysis service.
//!
//! Posts journal entries to the /analyze endpoint as `{"entry": ...}` and
//! maps the JSON response into the core `Analysis` model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use moodscribe_core::error::{MoodscribeError, MoodscribeResult};
use moodscribe_core::journal::{Analysis, AnalysisService};

/// Analysis service base URL (the local backend).
pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:8000";

/// Client for the external analysis service.
///
/// One best-effort request per call: no retries and no configured timeout,
/// the transport's defaults govern.
#[derive(Clone)]
pub struct AnalysisClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    entry: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    summary: Option<String>,
    recommendation: Option<String>,
}

impl AnalysisClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client for the default analysis service URL.
    pub fn default_client() -> Self {
        Self::new(DEFAULT_ANALYSIS_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn analyze(&self, entry: &str) -> MoodscribeResult<Analysis> {
        let request = AnalyzeRequest { entry };

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| MoodscribeError::ServiceUnreachable(e.to_string()))?;

        // Non-success bodies are not parsed.
        let status = response.status();
        if !status.is_success() {
            return Err(MoodscribeError::ServiceStatus(status.as_u16()));
        }

        let result: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| MoodscribeError::Decode(e.to_string()))?;

        debug!(
            has_summary = result.summary.is_some(),
            has_recommendation = result.recommendation.is_some(),
            "Received analysis response"
        );

        Ok(Analysis {
            summary: result.summary,
            recommendation: result.recommendation,
        })
    }

    /// Probe the service's /health endpoint.
    async fn health_check(&self) -> bool {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await;

        match response {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
