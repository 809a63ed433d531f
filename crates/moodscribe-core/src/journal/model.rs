//! Journal domain models.

use serde::{Deserialize, Serialize};

/// Fixed summary shown when the form was submitted without an entry.
pub const NO_ENTRY_SUMMARY: &str = "No entry provided.";

/// Fixed summary shown when the analysis service could not be used.
pub const FAILURE_SUMMARY: &str = "Sorry, there was an error analyzing your entry.";

/// Fixed recommendation accompanying [`FAILURE_SUMMARY`].
pub const FAILURE_RECOMMENDATION: &str = "Check that the backend is running and try again.";

/// A journal entry accepted for analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
}

impl Entry {
    /// Build an entry from a raw form value.
    ///
    /// A missing field or a value with no visible text counts as no entry.
    /// The accepted text is kept verbatim, untrimmed.
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        let text = raw?;
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }
}

/// What the analysis service computed for one entry.
///
/// Both fields are optional: a success response is trusted as-is, and a
/// body missing either field carries through as an absent value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analysis {
    pub summary: Option<String>,
    pub recommendation: Option<String>,
}

/// The result record rendered after a submission completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalResult {
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub original: String,
}

impl JournalResult {
    /// Result for a submission that carried no entry text.
    pub fn no_entry() -> Self {
        Self {
            summary: Some(NO_ENTRY_SUMMARY.to_string()),
            recommendation: None,
            original: String::new(),
        }
    }

    /// Fallback result for any failed exchange with the analysis service.
    pub fn service_failure(original: impl Into<String>) -> Self {
        Self {
            summary: Some(FAILURE_SUMMARY.to_string()),
            recommendation: Some(FAILURE_RECOMMENDATION.to_string()),
            original: original.into(),
        }
    }

    /// Result for a completed analysis, fields passed through verbatim.
    pub fn from_analysis(original: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            summary: analysis.summary,
            recommendation: analysis.recommendation,
            original: original.into(),
        }
    }

    /// Serialize the record into one plain-text blob for the clipboard.
    pub fn clipboard_text(&self) -> String {
        let mut sections = Vec::new();

        if !self.original.is_empty() {
            sections.push(format!("Entry:\n{}", self.original));
        }
        if let Some(summary) = &self.summary {
            sections.push(format!("Summary:\n{}", summary));
        }
        if let Some(recommendation) = &self.recommendation {
            sections.push(format!("Recommendation:\n{}", recommendation));
        }

        sections.join("\n\n")
    }
}

/// Form lifecycle for a single journal submission.
///
/// One form instance moves Idle -> Submitting -> Completed; the UI keeps
/// its controls disabled while Submitting so at most one request is
/// outstanding per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Completed(JournalResult),
}

impl SubmissionPhase {
    /// The completed result, if any.
    pub fn result(&self) -> Option<&JournalResult> {
        match self {
            Self::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
