//! Payout account endpoint tests.

mod common;

use common::{payout_account_json, TestHarness};
use monigo_client::{
    CreatePayoutAccountRequest, CustomerId, PayoutAccountId, PayoutMethod,
    UpdatePayoutAccountRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::Mock;

#[tokio::test]
async fn create_bank_account_under_customer() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("POST"))
                .and(path("/v1/customers/cust-abc/payout-accounts"))
                .and(body_json(json!({
                    "account_name": "Ada Obi",
                    "payout_method": "bank_transfer",
                    "bank_name": "First Bank",
                    "bank_code": "011",
                    "account_number": "0123456789",
                    "currency": "NGN",
                    "is_default": true
                }))),
            201,
            json!({ "payout_account": payout_account_json("pa-1") }),
        )
        .await;

    let request =
        CreatePayoutAccountRequest::bank_transfer("Ada Obi", "First Bank", "011", "0123456789")
            .with_currency("NGN")
            .as_default();
    let account = harness
        .client
        .payout_accounts()
        .create(&CustomerId::new("cust-abc"), &request)
        .await
        .unwrap();

    assert_eq!(account.payout_method, PayoutMethod::BankTransfer);
    assert!(account.is_default);
}

#[tokio::test]
async fn list_get_update_delete() {
    let harness = TestHarness::new().await;
    let base = "/v1/customers/cust-abc/payout-accounts";
    harness
        .respond(
            Mock::given(method("GET")).and(path(base)),
            200,
            json!({"payout_accounts": [payout_account_json("pa-1")], "count": 1}),
        )
        .await;
    harness
        .respond(
            Mock::given(method("GET")).and(path(format!("{base}/pa-1"))),
            200,
            json!({ "payout_account": payout_account_json("pa-1") }),
        )
        .await;
    harness
        .respond(
            Mock::given(method("PUT"))
                .and(path(format!("{base}/pa-1")))
                .and(body_json(json!({"is_default": false}))),
            200,
            json!({ "payout_account": payout_account_json("pa-1") }),
        )
        .await;
    harness
        .respond(
            Mock::given(method("DELETE")).and(path(format!("{base}/pa-1"))),
            200,
            json!({"message": "payout account deleted"}),
        )
        .await;

    let accounts = harness.client.payout_accounts();
    let customer = CustomerId::new("cust-abc");
    let account_id = PayoutAccountId::new("pa-1");

    assert_eq!(accounts.list(&customer).await.unwrap().count, 1);
    assert_eq!(
        accounts.get(&customer, &account_id).await.unwrap().account_name,
        "Ada Obi"
    );

    let update = UpdatePayoutAccountRequest {
        is_default: Some(false),
        ..Default::default()
    };
    accounts.update(&customer, &account_id, &update).await.unwrap();
    accounts.delete(&customer, &account_id).await.unwrap();
}
