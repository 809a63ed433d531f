//! Centralized error types for Moodscribe.

use thiserror::Error;

/// Main error type for Moodscribe operations.
///
/// Every variant describes a failed exchange with the analysis service;
/// the submission processor folds all of them into the same fallback
/// result, so callers above it never see these directly.
#[derive(Error, Debug)]
pub enum MoodscribeError {
    #[error("Analysis service returned status {0}")]
    ServiceStatus(u16),

    #[error("Analysis service unreachable: {0}")]
    ServiceUnreachable(String),

    #[error("Failed to decode analysis response: {0}")]
    Decode(String),
}

/// Result type for Moodscribe operations.
pub type MoodscribeResult<T> = Result<T, MoodscribeError>;
