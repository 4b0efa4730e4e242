//! Logical routes and their URL paths.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Query parameter carrying a one-time result token to the summary view.
pub const RESULT_TOKEN_PARAM: &str = "token";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Login entry; always accessible.
    Login,
    Dashboard,
    /// Single summary result.
    Summary,
    /// Summary history list.
    Summaries,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::Summary => "/summary",
            Self::Summaries => "/summaries",
        }
    }

    /// Whether rendering requires a session.
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// URL of the summary view for a stashed result.
pub fn summary_href(token: &str) -> String {
    format!("{}?{RESULT_TOKEN_PARAM}={token}", AppRoute::Summary.path())
}
