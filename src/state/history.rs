//! Summary history list state.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::error::NetworkError;
use crate::net::types::SummaryRecord;

/// Characters of summary text shown on a history card.
pub const PREVIEW_CHARS: usize = 150;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryState {
    pub items: Vec<SummaryRecord>,
    pub loading: bool,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl HistoryState {
    /// Apply the list fetch. Failures are logged and show as an empty list.
    pub fn apply(&mut self, fetched: Result<Vec<SummaryRecord>, NetworkError>) {
        self.loading = false;
        self.items = fetched.unwrap_or_else(|e| {
            log::warn!("history: failed to fetch summaries: {e}");
            Vec::new()
        });
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

/// Card preview: the first [`PREVIEW_CHARS`] characters followed by `...`.
pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Date part of an ISO-8601 timestamp (`2024-05-01T10:00:00` → `2024-05-01`).
pub fn created_date(created_at: &str) -> &str {
    created_at
        .split(['T', ' '])
        .next()
        .filter(|d| !d.is_empty())
        .unwrap_or(created_at)
}
