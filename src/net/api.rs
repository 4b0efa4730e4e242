//! REST API client for the summarization backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`NetworkError::Unavailable`] since these endpoints only exist for the
//! browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`NetworkError::Status`] carrying the response
//! body, so the submission flow can surface it verbatim. Whether an error is
//! absorbed or shown is decided by the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::NetworkError;

use super::types::{DashboardMetrics, SubmissionRequest, SummarizeResponse, SummaryRecord};
#[cfg(feature = "csr")]
use super::types::{GoogleLoginRequest, SummariesResponse};

pub const GOOGLE_LOGIN_PATH: &str = "auth/google-login";
pub const METRICS_PATH: &str = "dashboard/metrics";
pub const SUMMARIZE_PATH: &str = "summarize";
pub const SUMMARIES_PATH: &str = "dashboard/summaries";

/// The backend contract the flows depend on.
///
/// The app talks to [`HttpBackend`]; tests substitute a scripted double.
#[allow(async_fn_in_trait)]
pub trait SummaryBackend {
    /// `POST auth/google-login` with the raw credential.
    async fn notify_login(&self, token: &str) -> Result<(), NetworkError>;

    /// `GET dashboard/metrics?email=`.
    async fn fetch_metrics(&self, email: &str) -> Result<DashboardMetrics, NetworkError>;

    /// `POST summarize`.
    async fn summarize(&self, request: &SubmissionRequest) -> Result<SummarizeResponse, NetworkError>;

    /// `GET dashboard/summaries?email=`.
    async fn fetch_summaries(&self, email: &str) -> Result<Vec<SummaryRecord>, NetworkError>;
}

/// Join a backend path onto the configured base URL.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// [`SummaryBackend`] over HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[cfg(any(test, feature = "csr"))]
    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> NetworkError {
    NetworkError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, NetworkError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(NetworkError::Status { status, body })
}

#[cfg(feature = "csr")]
async fn get_for_email<T: serde::de::DeserializeOwned>(url: &str, email: &str) -> Result<T, NetworkError> {
    let resp = gloo_net::http::Request::get(url)
        .query([("email", email)])
        .send()
        .await
        .map_err(transport)?;
    ensure_ok(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| NetworkError::Decode(e.to_string()))
}

impl SummaryBackend for HttpBackend {
    async fn notify_login(&self, token: &str) -> Result<(), NetworkError> {
        #[cfg(feature = "csr")]
        {
            let payload = GoogleLoginRequest { token: token.to_owned() };
            let resp = gloo_net::http::Request::post(&self.url(GOOGLE_LOGIN_PATH))
                .json(&payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(NetworkError::Unavailable)
        }
    }

    async fn fetch_metrics(&self, email: &str) -> Result<DashboardMetrics, NetworkError> {
        #[cfg(feature = "csr")]
        {
            get_for_email(&self.url(METRICS_PATH), email).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err(NetworkError::Unavailable)
        }
    }

    async fn summarize(&self, request: &SubmissionRequest) -> Result<SummarizeResponse, NetworkError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(SUMMARIZE_PATH))
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp)
                .await?
                .json::<SummarizeResponse>()
                .await
                .map_err(|e| NetworkError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(NetworkError::Unavailable)
        }
    }

    async fn fetch_summaries(&self, email: &str) -> Result<Vec<SummaryRecord>, NetworkError> {
        #[cfg(feature = "csr")]
        {
            let body: SummariesResponse = get_for_email(&self.url(SUMMARIES_PATH), email).await?;
            Ok(body.summaries)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err(NetworkError::Unavailable)
        }
    }
}
