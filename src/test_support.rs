//! Shared test doubles.

use std::cell::RefCell;

use crate::error::NetworkError;
use crate::net::api::SummaryBackend;
use crate::net::types::{DashboardMetrics, Identity, SubmissionRequest, SummarizeResponse, SummaryRecord};
use crate::state::session::SessionStore;

/// A session already holding `{name, email}`.
pub fn signed_in_session(name: &str, email: &str) -> SessionStore {
    let session = SessionStore::in_memory();
    session.save(&Identity { name: name.to_owned(), email: email.to_owned(), picture: None });
    session
}

/// [`SummaryBackend`] returning canned results and recording every call.
pub struct ScriptedBackend {
    login: Result<(), NetworkError>,
    metrics: Result<DashboardMetrics, NetworkError>,
    summarize: Result<SummarizeResponse, NetworkError>,
    summaries: Result<Vec<SummaryRecord>, NetworkError>,
    calls: RefCell<Vec<&'static str>>,
    requests: RefCell<Vec<SubmissionRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            login: Ok(()),
            metrics: Ok(DashboardMetrics::default()),
            summarize: Ok(SummarizeResponse { summary: "summary".to_owned() }),
            summaries: Ok(Vec::new()),
            calls: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_login(mut self, result: Result<(), NetworkError>) -> Self {
        self.login = result;
        self
    }

    pub fn with_metrics(mut self, result: Result<DashboardMetrics, NetworkError>) -> Self {
        self.metrics = result;
        self
    }

    pub fn with_summary(mut self, result: Result<&str, NetworkError>) -> Self {
        self.summarize = result.map(|s| SummarizeResponse { summary: s.to_owned() });
        self
    }

    pub fn with_summaries(mut self, result: Result<Vec<SummaryRecord>, NetworkError>) -> Self {
        self.summaries = result;
        self
    }

    pub fn calls(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    pub fn requests(&self) -> Vec<SubmissionRequest> {
        self.requests.borrow().clone()
    }
}

impl SummaryBackend for ScriptedBackend {
    async fn notify_login(&self, _token: &str) -> Result<(), NetworkError> {
        self.calls.borrow_mut().push("notify_login");
        self.login.clone()
    }

    async fn fetch_metrics(&self, _email: &str) -> Result<DashboardMetrics, NetworkError> {
        self.calls.borrow_mut().push("fetch_metrics");
        self.metrics.clone()
    }

    async fn summarize(&self, request: &SubmissionRequest) -> Result<SummarizeResponse, NetworkError> {
        self.calls.borrow_mut().push("summarize");
        self.requests.borrow_mut().push(request.clone());
        self.summarize.clone()
    }

    async fn fetch_summaries(&self, _email: &str) -> Result<Vec<SummaryRecord>, NetworkError> {
        self.calls.borrow_mut().push("fetch_summaries");
        self.summaries.clone()
    }
}
