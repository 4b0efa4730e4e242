use super::*;

fn result(summary: &str) -> SummaryResult {
    SummaryResult { summary: summary.to_owned(), original: format!("{summary} original") }
}

#[test]
fn stashed_result_is_taken_once() {
    let cache = ResultCache::new();
    let token = cache.stash(result("hi"));
    assert_eq!(cache.take(&token), Some(result("hi")));
    assert_eq!(cache.take(&token), None);
}

#[test]
fn unknown_or_invalid_tokens_find_nothing() {
    let cache = ResultCache::new();
    let token = cache.stash(result("hi"));
    assert_eq!(cache.take(&Uuid::new_v4().to_string()), None);
    assert_eq!(cache.take("not-a-uuid"), None);
    assert_eq!(cache.take(&token), Some(result("hi")));
}

#[test]
fn tokens_are_distinct_per_stash() {
    let cache = ResultCache::new();
    let a = cache.stash(result("a"));
    let b = cache.stash(result("b"));
    assert_ne!(a, b);
    assert_eq!(cache.take(&b), Some(result("b")));
    assert_eq!(cache.take(&a), Some(result("a")));
}

#[test]
fn oldest_unopened_results_are_evicted() {
    let cache = ResultCache::new();
    let first = cache.stash(result("first"));
    let newer: Vec<String> = (0..MAX_PENDING_RESULTS).map(|i| cache.stash(result(&i.to_string()))).collect();
    assert_eq!(cache.take(&first), None);
    for (i, token) in newer.iter().enumerate() {
        assert_eq!(cache.take(token), Some(result(&i.to_string())));
    }
}

#[test]
fn clones_share_entries() {
    let cache = ResultCache::new();
    let token = cache.clone().stash(result("hi"));
    assert_eq!(cache.take(&token), Some(result("hi")));
}
