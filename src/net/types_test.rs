use super::*;

fn identity(name: &str, email: &str) -> Identity {
    Identity { name: name.to_owned(), email: email.to_owned(), picture: None }
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_without_picture_serializes_without_field() {
    let json = serde_json::to_value(identity("A", "a@x.com")).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "A", "email": "a@x.com" }));
}

#[test]
fn identity_ignores_unknown_claims() {
    let parsed: Identity = serde_json::from_value(serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "picture": "https://example.com/ada.png",
        "sub": "1234",
        "email_verified": true
    }))
    .unwrap();
    assert_eq!(parsed.picture.as_deref(), Some("https://example.com/ada.png"));
    assert_eq!(parsed.name, "Ada");
}

#[test]
fn identity_missing_email_fails_to_parse() {
    let parsed = serde_json::from_value::<Identity>(serde_json::json!({ "name": "A" }));
    assert!(parsed.is_err());
}

#[test]
fn identity_validate_requires_email_with_at_sign() {
    assert_eq!(identity("A", "a@x.com").validate(), Ok(()));
    assert_eq!(identity("A", "  ").validate(), Err("email is empty"));
    assert_eq!(identity("A", "ax.com").validate(), Err("email has no '@'"));
}

#[test]
fn identity_display_name_falls_back_to_user() {
    assert_eq!(identity("Ada", "a@x.com").display_name(), "Ada");
    assert_eq!(identity("", "a@x.com").display_name(), "User");
}

#[test]
fn identity_initial_uppercases_first_letter() {
    assert_eq!(identity("ada", "a@x.com").initial(), "A");
    assert_eq!(identity("", "a@x.com").initial(), "?");
}

// =============================================================
// Backend payloads
// =============================================================

#[test]
fn submission_request_serializes_backend_field_names() {
    let req = SubmissionRequest { content: "hello world".to_owned(), user_email: "a@x.com".to_owned() };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        serde_json::json!({ "content": "hello world", "user_email": "a@x.com" })
    );
}

#[test]
fn metrics_default_to_zero_when_field_missing() {
    let metrics: DashboardMetrics = serde_json::from_str("{}").unwrap();
    assert_eq!(metrics.total_summaries, 0);
}

#[test]
fn summaries_response_parses_records() {
    let body: SummariesResponse = serde_json::from_value(serde_json::json!({
        "summaries": [{
            "id": 7,
            "summary_text": "short",
            "original_text": "long text",
            "created_at": "2024-05-01T10:00:00"
        }]
    }))
    .unwrap();
    assert_eq!(body.summaries.len(), 1);
    let result = SummaryResult::from(body.summaries[0].clone());
    assert_eq!(result, SummaryResult { summary: "short".to_owned(), original: "long text".to_owned() });
}

#[test]
fn summaries_response_missing_list_is_empty() {
    let body: SummariesResponse = serde_json::from_str("{}").unwrap();
    assert!(body.summaries.is_empty());
}
