//! Shared test harness: a mock Monigo API and a client pointed at it.

#![allow(dead_code)]

use monigo_client::{ClientOptions, MonigoClient};
use serde_json::{json, Value};
use wiremock::matchers::header;
use wiremock::{MockBuilder, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test_key_abc";

pub struct TestHarness {
    pub server: MockServer,
    pub client: MonigoClient,
}

impl TestHarness {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = MonigoClient::with_options(
            TEST_API_KEY,
            ClientOptions::with_base_url(server.uri()),
        )
        .expect("client should build against the mock server");
        Self { server, client }
    }

    /// Mount `builder` (with the bearer header required) answering `status` with `body`.
    pub async fn respond(&self, builder: MockBuilder, status: u16, body: Value) {
        builder
            .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mount `builder` answering with the standard error envelope.
    pub async fn respond_error(&self, builder: MockBuilder, status: u16, message: &str) {
        builder
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "error": message })))
            .mount(&self.server)
            .await;
    }

    /// The JSON body of the single request the server received.
    pub async fn received_json(&self) -> Value {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        assert_eq!(requests.len(), 1, "expected exactly one request");
        serde_json::from_slice(&requests[0].body).expect("request body is JSON")
    }
}

/// Query parameters of a received request, sorted by name.
pub fn query_pairs(request: &wiremock::Request) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = request.url.query_pairs().into_owned().collect();
    pairs.sort();
    pairs
}

// ============================================================================
// Fixtures
// ============================================================================

pub const TIMESTAMP: &str = "2026-03-01T00:00:00Z";

pub fn customer_json(id: &str) -> Value {
    json!({
        "id": id,
        "org_id": "org-1",
        "external_id": "usr_1",
        "name": "Acme Ltd",
        "email": "billing@acme.test",
        "phone": "+2348012345678",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

pub fn metric_json(id: &str) -> Value {
    json!({
        "id": id,
        "org_id": "org-1",
        "name": "API Calls",
        "event_name": "api_call",
        "aggregation": "count",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

pub fn plan_json(id: &str) -> Value {
    json!({
        "id": id,
        "org_id": "org-1",
        "name": "Starter",
        "currency": "NGN",
        "plan_type": "collection",
        "billing_period": "monthly",
        "trial_period_days": 0,
        "prices": [{
            "id": "price-1",
            "plan_id": id,
            "metric_id": "met-1",
            "model": "flat_unit",
            "unit_price": "2.500000",
            "created_at": TIMESTAMP,
            "updated_at": TIMESTAMP
        }],
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

pub fn subscription_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "org_id": "org-1",
        "customer_id": "cust-abc",
        "plan_id": "plan-1",
        "status": status,
        "current_period_start": TIMESTAMP,
        "current_period_end": "2026-04-01T00:00:00Z",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

pub fn payout_account_json(id: &str) -> Value {
    json!({
        "id": id,
        "customer_id": "cust-abc",
        "org_id": "org-1",
        "account_name": "Ada Obi",
        "bank_name": "First Bank",
        "bank_code": "011",
        "account_number": "0123456789",
        "payout_method": "bank_transfer",
        "currency": "NGN",
        "is_default": true,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

pub fn invoice_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "org_id": "org-1",
        "customer_id": "cust-abc",
        "subscription_id": "sub-1",
        "status": status,
        "currency": "NGN",
        "subtotal": "1500.00",
        "vat_enabled": false,
        "total": "1500.00",
        "period_start": TIMESTAMP,
        "period_end": "2026-04-01T00:00:00Z",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}

pub fn portal_token_json(id: &str) -> Value {
    json!({
        "id": id,
        "org_id": "org-1",
        "customer_id": "cust-abc",
        "token": "ab12cd34",
        "label": "Main portal link",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
        "portal_url": "https://app.monigo.co/portal/ab12cd34"
    })
}

pub fn replay_job_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "org_id": "org-1",
        "initiated_by": "key-1",
        "status": status,
        "from_timestamp": TIMESTAMP,
        "to_timestamp": "2026-03-02T00:00:00Z",
        "is_test": false,
        "events_total": 0,
        "events_replayed": 0,
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP
    })
}
