//! Invoice endpoint tests.

mod common;

use common::{invoice_json, query_pairs, TestHarness};
use monigo_client::{
    CustomerId, InvoiceId, InvoiceStatus, ListInvoicesParams, RequestOptions, SubscriptionId,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::Mock;

#[tokio::test]
async fn generate_posts_subscription_id() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("POST"))
                .and(path("/v1/invoices/generate"))
                .and(body_json(json!({"subscription_id": "sub-1"}))),
            201,
            json!({ "invoice": invoice_json("inv-1", "draft") }),
        )
        .await;

    let invoice = harness
        .client
        .invoices()
        .generate(&SubscriptionId::new("sub-1"))
        .await
        .unwrap();

    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.total.to_string(), "1500.00");
    assert!(!invoice.is_payable());
}

#[tokio::test]
async fn generate_with_idempotency_key() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("POST"))
                .and(path("/v1/invoices/generate"))
                .and(header("idempotency-key", "gen-2026-03")),
            201,
            json!({ "invoice": invoice_json("inv-1", "draft") }),
        )
        .await;

    harness
        .client
        .invoices()
        .generate_with_options(
            &SubscriptionId::new("sub-1"),
            RequestOptions::new().with_idempotency_key("gen-2026-03"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn list_filters_by_status_and_customer() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("GET")).and(path("/v1/invoices")),
            200,
            json!({"invoices": [invoice_json("inv-1", "finalized")], "count": 1}),
        )
        .await;

    let params = ListInvoicesParams {
        status: Some(InvoiceStatus::Finalized),
        customer_id: Some(CustomerId::new("cust-abc")),
    };
    let response = harness.client.invoices().list(&params).await.unwrap();
    assert!(response.invoices[0].is_payable());

    let requests = harness.server.received_requests().await.unwrap();
    assert_eq!(
        query_pairs(&requests[0]),
        [
            ("customer_id".to_string(), "cust-abc".to_string()),
            ("status".to_string(), "finalized".to_string()),
        ]
    );
}

#[tokio::test]
async fn get_includes_line_items() {
    let harness = TestHarness::new().await;
    let mut invoice = invoice_json("inv-1", "finalized");
    invoice["line_items"] = json!([{
        "id": "li-1",
        "invoice_id": "inv-1",
        "metric_id": "met-1",
        "description": "API calls",
        "quantity": "1500",
        "unit_price": "1.000000",
        "amount": "1500.00",
        "created_at": "2026-04-01T00:00:00Z"
    }]);
    harness
        .respond(
            Mock::given(method("GET")).and(path("/v1/invoices/inv-1")),
            200,
            json!({ "invoice": invoice }),
        )
        .await;

    let invoice = harness
        .client
        .invoices()
        .get(&InvoiceId::new("inv-1"))
        .await
        .unwrap();

    assert_eq!(invoice.line_items.len(), 1);
    assert_eq!(invoice.line_items_total(), invoice.subtotal);
}

#[tokio::test]
async fn finalize_and_void() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("POST")).and(path("/v1/invoices/inv-1/finalize")),
            200,
            json!({ "invoice": invoice_json("inv-1", "finalized") }),
        )
        .await;
    harness
        .respond(
            Mock::given(method("POST")).and(path("/v1/invoices/inv-1/void")),
            200,
            json!({ "invoice": invoice_json("inv-1", "void") }),
        )
        .await;

    let id = InvoiceId::new("inv-1");
    let finalized = harness.client.invoices().finalize(&id).await.unwrap();
    assert_eq!(finalized.status, InvoiceStatus::Finalized);

    let voided = harness.client.invoices().void(&id).await.unwrap();
    assert_eq!(voided.status, InvoiceStatus::Void);
}
