//! Portal token endpoint tests.

mod common;

use common::{portal_token_json, query_pairs, TestHarness};
use monigo_client::{CreatePortalTokenRequest, CustomerId, PortalTokenId};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::Mock;

#[tokio::test]
async fn create_token_with_label_and_expiry() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("POST"))
                .and(path("/v1/portal/tokens"))
                .and(body_json(json!({
                    "customer_external_id": "usr_1",
                    "label": "Main portal link",
                    "expires_at": "2026-12-31T23:59:59Z"
                }))),
            201,
            json!({ "token": portal_token_json("pt-1") }),
        )
        .await;

    let request = CreatePortalTokenRequest::new("usr_1")
        .with_label("Main portal link")
        .expires_at("2026-12-31T23:59:59Z".parse().unwrap());
    let token = harness.client.portal_tokens().create(&request).await.unwrap();

    assert_eq!(token.portal_url, "https://app.monigo.co/portal/ab12cd34");
    assert!(!token.is_revoked());
}

#[tokio::test]
async fn list_tokens_for_customer() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("GET")).and(path("/v1/portal/tokens")),
            200,
            json!({"tokens": [portal_token_json("pt-1")], "count": 1}),
        )
        .await;

    let response = harness
        .client
        .portal_tokens()
        .list(&CustomerId::new("cust-abc"))
        .await
        .unwrap();

    assert_eq!(response.tokens[0].id, PortalTokenId::new("pt-1"));
    let requests = harness.server.received_requests().await.unwrap();
    assert_eq!(
        query_pairs(&requests[0]),
        [("customer_id".to_string(), "cust-abc".to_string())]
    );
}

#[tokio::test]
async fn revoke_token() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("DELETE")).and(path("/v1/portal/tokens/pt-1")),
            200,
            json!({"message": "token revoked"}),
        )
        .await;

    harness
        .client
        .portal_tokens()
        .revoke(&PortalTokenId::new("pt-1"))
        .await
        .unwrap();
}
