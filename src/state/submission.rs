//! Summarization request flow and the dashboard's summary counter.
//!
//! DESIGN
//! ======
//! `Composing → Submitting → {Delivered | Failed}`. The page drives it in two
//! halves around the network call: `begin` validates and builds the request,
//! `finish` applies the response. Keeping both halves synchronous lets the
//! page hold the state in a signal and apply `finish` with `try_update`, so a
//! response that lands after the dashboard unmounted is dropped.
//!
//! The counter is `seeded + local`: the metrics fetch sets the seed, each
//! delivered summary bumps the local part, and neither overwrites the other.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::error::{NetworkError, SessionExpired, SubmitError, ValidationError};
use crate::net::types::{DashboardMetrics, SubmissionRequest, SummarizeResponse, SummaryResult};
use crate::state::session::SessionStore;

pub const EMPTY_CONTENT_MESSAGE: &str = "Please enter some content to summarize";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Composing,
    Submitting,
    Delivered,
    /// Message shown to the user; submitting again starts a new attempt.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub draft: String,
    pub phase: SubmitPhase,
    seeded_count: u64,
    local_submissions: u64,
}

impl SubmissionState {
    /// Summaries shown on the dashboard card.
    pub fn summary_count(&self) -> u64 {
        self.seeded_count.saturating_add(self.local_submissions)
    }

    /// Apply the metrics fetch. Failures are logged and seed zero.
    pub fn seed_count(&mut self, metrics: Result<DashboardMetrics, NetworkError>) {
        self.seeded_count = match metrics {
            Ok(metrics) => metrics.total_summaries,
            Err(e) => {
                log::warn!("dashboard: failed to fetch summary count: {e}");
                0
            }
        };
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
        if !self.is_submitting() {
            self.phase = SubmitPhase::Composing;
        }
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::InFlight`] while a previous attempt is pending
    /// - [`SubmitError::Validation`] for empty or whitespace-only content
    /// - [`SubmitError::SessionExpired`] when the session disappeared
    ///
    /// None of these change the phase or reach the network.
    pub fn begin(&mut self, session: &SessionStore) -> Result<SubmissionRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if self.draft.trim().is_empty() {
            return Err(ValidationError { message: EMPTY_CONTENT_MESSAGE }.into());
        }
        let identity = session.load().ok_or(SessionExpired)?;

        self.phase = SubmitPhase::Submitting;
        log::info!("dashboard: submitting {} chars for summarization", self.draft.len());
        Ok(SubmissionRequest { content: self.draft.clone(), user_email: identity.email })
    }

    /// Apply the backend's answer to `request`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Network`] when the call failed; the flow is then
    /// `Failed` with the error message and the draft kept for another try.
    pub fn finish(
        &mut self,
        request: SubmissionRequest,
        response: Result<SummarizeResponse, NetworkError>,
    ) -> Result<SummaryResult, SubmitError> {
        match response {
            Ok(body) => {
                self.draft.clear();
                self.local_submissions += 1;
                self.phase = SubmitPhase::Delivered;
                Ok(SummaryResult { summary: body.summary, original: request.content })
            }
            Err(e) => {
                log::error!("dashboard: summarization failed: {e}");
                let err = SubmitError::Network(e);
                self.phase = SubmitPhase::Failed(err.to_string());
                Err(err)
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting)
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
