//! API error decoding and classification against a live mock server.

mod common;

use common::TestHarness;
use monigo_client::{
    is_conflict, is_forbidden, is_not_found, is_quota_exceeded, is_rate_limited,
    is_unauthorized, is_validation_error, ApiErrorKind, ClientError, CustomerId,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn matching_predicates(err: &ClientError) -> Vec<&'static str> {
    let checks: [(&str, fn(&ClientError) -> bool); 7] = [
        ("not_found", |e| is_not_found(e)),
        ("unauthorized", |e| is_unauthorized(e)),
        ("forbidden", |e| is_forbidden(e)),
        ("conflict", |e| is_conflict(e)),
        ("rate_limited", |e| is_rate_limited(e)),
        ("quota_exceeded", |e| is_quota_exceeded(e)),
        ("validation", |e| is_validation_error(e)),
    ];
    checks
        .iter()
        .filter(|(_, check)| check(err))
        .map(|(name, _)| *name)
        .collect()
}

async fn get_customer_with_status(status: u16, body: serde_json::Value) -> ClientError {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cust-missing"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&harness.server)
        .await;

    harness
        .client
        .customers()
        .get(&CustomerId::new("cust-missing"))
        .await
        .unwrap_err()
}

#[tokio::test]
async fn not_found_matches_only_not_found() {
    let err = get_customer_with_status(404, json!({"error": "not found"})).await;

    assert!(is_not_found(&err));
    assert_eq!(matching_predicates(&err), ["not_found"]);
    assert_eq!(err.kind(), Some(ApiErrorKind::NotFound));

    let api = err.api_error().unwrap();
    assert_eq!(api.status_code, 404);
    assert_eq!(api.message, "not found");
    assert_eq!(err.to_string(), "HTTP 404: not found");
}

#[tokio::test]
async fn validation_error_carries_details() {
    let err = get_customer_with_status(
        400,
        json!({"error": "validation failed", "details": {"email": "invalid"}}),
    )
    .await;

    assert!(is_validation_error(&err));
    assert_eq!(matching_predicates(&err), ["validation"]);
    let api = err.api_error().unwrap();
    assert_eq!(api.details.get("email").map(String::as_str), Some("invalid"));
    assert_eq!(err.to_string(), "HTTP 400: validation failed (email: invalid)");
}

#[tokio::test]
async fn bad_request_without_details_matches_nothing() {
    let err = get_customer_with_status(400, json!({"error": "bad request"})).await;
    assert!(matching_predicates(&err).is_empty());
    assert_eq!(err.status_code(), Some(400));
}

#[tokio::test]
async fn each_classified_status_matches_exactly_one_predicate() {
    let cases = [
        (401, "unauthorized"),
        (402, "quota_exceeded"),
        (403, "forbidden"),
        (409, "conflict"),
        (429, "rate_limited"),
    ];
    for (status, expected) in cases {
        let err = get_customer_with_status(status, json!({"error": "nope"})).await;
        assert_eq!(matching_predicates(&err), [expected], "status {status}");
    }
}

#[tokio::test]
async fn server_errors_are_unclassified() {
    let err = get_customer_with_status(500, json!({"error": "internal error"})).await;
    assert!(matching_predicates(&err).is_empty());
    assert!(!err.is_retryable());
    assert!(err.api_error().unwrap().is_server_error());
}

#[tokio::test]
async fn non_json_error_body_becomes_the_message() {
    let harness = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down\n"))
        .mount(&harness.server)
        .await;

    let err = harness.client.customers().list().await.unwrap_err();

    let api = err.api_error().unwrap();
    assert_eq!(api.status_code, 502);
    assert_eq!(api.message, "upstream down\n");
    assert!(api.details.is_empty());
}

#[tokio::test]
async fn classification_is_stable() {
    let err = get_customer_with_status(429, json!({"error": "slow down"})).await;
    assert_eq!(is_rate_limited(&err), is_rate_limited(&err));
    assert!(err.is_retryable());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn predicates_accept_results_and_boxed_errors() {
    let err = get_customer_with_status(404, json!({"error": "not found"})).await;

    let result: Result<(), ClientError> = Err(err);
    assert!(is_not_found(&result));

    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(result.unwrap_err());
    assert!(is_not_found(boxed.as_ref()));
    assert!(!is_conflict(boxed.as_ref()));
}
