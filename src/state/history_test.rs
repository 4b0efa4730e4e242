use super::*;

fn record(id: i64, summary: &str) -> SummaryRecord {
    SummaryRecord {
        id,
        summary_text: summary.to_owned(),
        original_text: format!("original {id}"),
        created_at: "2024-05-01T10:00:00".to_owned(),
    }
}

#[test]
fn history_starts_loading() {
    let state = HistoryState::default();
    assert!(state.loading);
    assert!(!state.is_empty());
}

#[test]
fn apply_success_stores_records() {
    let mut state = HistoryState::default();
    state.apply(Ok(vec![record(1, "a"), record(2, "b")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn apply_failure_shows_empty_list() {
    let mut state = HistoryState::default();
    state.apply(Err(NetworkError::Status { status: 404, body: "no user".to_owned() }));
    assert!(state.is_empty());
}

#[test]
fn preview_truncates_to_150_chars() {
    let long = "x".repeat(400);
    let p = preview(&long);
    assert_eq!(p.len(), PREVIEW_CHARS + 3);
    assert!(p.ends_with("..."));
}

#[test]
fn preview_respects_multibyte_boundaries() {
    let text = "é".repeat(200);
    assert_eq!(preview(&text).chars().count(), PREVIEW_CHARS + 3);
}

#[test]
fn preview_of_short_text_keeps_it_whole() {
    assert_eq!(preview("short"), "short...");
}

#[test]
fn created_date_takes_date_part() {
    assert_eq!(created_date("2024-05-01T10:00:00"), "2024-05-01");
    assert_eq!(created_date("2024-05-01 10:00:00"), "2024-05-01");
    assert_eq!(created_date("2024-05-01"), "2024-05-01");
}

#[test]
fn fetched_records_open_as_summary_results() {
    use crate::net::api::SummaryBackend;
    use crate::net::types::SummaryResult;
    use crate::test_support::ScriptedBackend;

    let backend = ScriptedBackend::new().with_summaries(Ok(vec![record(7, "short")]));
    let mut state = HistoryState::default();
    state.apply(futures::executor::block_on(backend.fetch_summaries("a@x.com")));
    assert_eq!(backend.calls("fetch_summaries"), 1);

    let opened: SummaryResult = state.items[0].clone().into();
    assert_eq!(opened, SummaryResult { summary: "short".to_owned(), original: "original 7".to_owned() });
}
