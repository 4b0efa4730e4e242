//! Short-lived handoff of summary results to the result view.
//!
//! DESIGN
//! ======
//! A producer stashes a [`SummaryResult`] and navigates to the summary route
//! with the returned one-time token in the query string. The result view
//! takes the entry, which removes it. Entries live in memory only, so a full
//! page reload (or a reused token) finds nothing and the view falls back to
//! its empty state.

#[cfg(test)]
#[path = "result_cache_test.rs"]
mod result_cache_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::net::types::SummaryResult;

/// Results stashed but never opened are dropped oldest-first past this size.
pub const MAX_PENDING_RESULTS: usize = 8;

#[derive(Clone, Debug, Default)]
pub struct ResultCache {
    entries: Arc<Mutex<VecDeque<(Uuid, SummaryResult)>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `result` and return the token that retrieves it once.
    pub fn stash(&self, result: SummaryResult) -> String {
        let token = Uuid::new_v4();
        match self.entries.lock() {
            Ok(mut entries) => {
                while entries.len() >= MAX_PENDING_RESULTS {
                    entries.pop_front();
                }
                entries.push_back((token, result));
            }
            Err(_) => log::warn!("result cache: lock poisoned, result dropped"),
        }
        token.to_string()
    }

    /// Remove and return the result for `token`.
    pub fn take(&self, token: &str) -> Option<SummaryResult> {
        let token = Uuid::parse_str(token.trim()).ok()?;
        let mut entries = self.entries.lock().ok()?;
        let index = entries.iter().position(|(t, _)| *t == token)?;
        entries.remove(index).map(|(_, result)| result)
    }
}
