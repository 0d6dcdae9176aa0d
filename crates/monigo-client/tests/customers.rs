//! Customer endpoint tests.

mod common;

use common::{customer_json, TestHarness};
use monigo_client::{CreateCustomerRequest, CustomerId, UpdateCustomerRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_customer_sends_fields_and_unwraps_envelope() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("POST"))
                .and(path("/v1/customers"))
                .and(body_json(json!({
                    "external_id": "ext-1",
                    "name": "Acme Corp",
                    "email": "acme@example.com"
                }))),
            201,
            json!({ "customer": customer_json("cust-abc") }),
        )
        .await;

    let request = CreateCustomerRequest::new("ext-1", "Acme Corp").with_email("acme@example.com");
    let customer = harness.client.customers().create(&request).await.unwrap();

    assert_eq!(customer.id.as_str(), "cust-abc");
    assert_eq!(customer.name, "Acme Ltd");

    let received = harness.received_json().await;
    assert_eq!(received["external_id"], "ext-1");
    assert!(received.get("phone").is_none());
}

#[tokio::test]
async fn list_customers() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("GET")).and(path("/v1/customers")),
            200,
            json!({
                "customers": [customer_json("cust-1"), customer_json("cust-2")],
                "count": 2
            }),
        )
        .await;

    let response = harness.client.customers().list().await.unwrap();

    assert_eq!(response.count, 2);
    assert_eq!(response.customers[1].id, CustomerId::new("cust-2"));
}

#[tokio::test]
async fn get_customer() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("GET")).and(path("/v1/customers/cust-abc")),
            200,
            json!({ "customer": customer_json("cust-abc") }),
        )
        .await;

    let customer = harness
        .client
        .customers()
        .get(&CustomerId::new("cust-abc"))
        .await
        .unwrap();

    assert_eq!(customer.email, "billing@acme.test");
    assert_eq!(customer.phone, "+2348012345678");
}

#[tokio::test]
async fn update_customer_sends_only_set_fields() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("PUT"))
                .and(path("/v1/customers/cust-abc"))
                .and(body_json(json!({"email": "new@acme.test", "metadata": {"tier": "gold"}}))),
            200,
            json!({ "customer": customer_json("cust-abc") }),
        )
        .await;

    let update = UpdateCustomerRequest {
        email: Some("new@acme.test".into()),
        metadata: Some(json!({"tier": "gold"})),
        ..Default::default()
    };
    harness
        .client
        .customers()
        .update(&CustomerId::new("cust-abc"), &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_ignores_message_body() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("DELETE")).and(path("/v1/customers/cust-abc")),
            200,
            json!({"message": "customer deleted"}),
        )
        .await;

    harness
        .client
        .customers()
        .delete(&CustomerId::new("cust-abc"))
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let harness = TestHarness::new().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cust-abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness
        .client
        .customers()
        .delete(&CustomerId::new("cust-abc"))
        .await
        .unwrap();
}
