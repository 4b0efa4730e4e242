//! Wire and session DTOs shared by the client flows.
//!
//! DESIGN
//! ======
//! Field names match the backend's JSON so serde needs no renames; the
//! transient values (`SubmissionRequest`, `SummaryResult`) never touch storage.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Decoded profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: String,
    /// Correlation key with the backend.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Identity {
    /// Structural check applied to decoded credentials and stored sessions.
    pub fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is empty");
        }
        if !email.contains('@') {
            return Err("email has no '@'");
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { "User" } else { &self.name }
    }

    /// Uppercased first letter of the name, or `?`.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// Body of `POST summarize`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub content: String,
    pub user_email: String,
}

/// Body of `POST auth/google-login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// What the result view displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryResult {
    pub summary: String,
    pub original: String,
}

/// A stored summary as returned by `GET dashboard/summaries`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SummaryRecord {
    pub id: i64,
    pub summary_text: String,
    pub original_text: String,
    pub created_at: String,
}

impl From<SummaryRecord> for SummaryResult {
    fn from(record: SummaryRecord) -> Self {
        Self { summary: record.summary_text, original: record.original_text }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SummariesResponse {
    #[serde(default)]
    pub summaries: Vec<SummaryRecord>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_summaries: u64,
}
