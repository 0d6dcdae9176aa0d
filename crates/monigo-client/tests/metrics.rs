//! Metric endpoint tests.

mod common;

use common::{metric_json, TestHarness};
use monigo_client::{
    is_not_found, Aggregation, CreateMetricRequest, MetricId, UpdateMetricRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::Mock;

#[tokio::test]
async fn create_sum_metric() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("POST"))
                .and(path("/v1/metrics"))
                .and(body_json(json!({
                    "name": "Storage Written",
                    "event_name": "storage.write",
                    "aggregation": "sum",
                    "aggregation_property": "bytes"
                }))),
            201,
            json!({ "metric": metric_json("met-2") }),
        )
        .await;

    let request = CreateMetricRequest::new("Storage Written", "storage.write", Aggregation::Sum)
        .with_aggregation_property("bytes");
    let metric = harness.client.metrics().create(&request).await.unwrap();

    assert_eq!(metric.id, MetricId::new("met-2"));
}

#[tokio::test]
async fn metric_list_update_delete() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("GET")).and(path("/v1/metrics")),
            200,
            json!({"metrics": [metric_json("met-1")], "count": 1}),
        )
        .await;
    harness
        .respond(
            Mock::given(method("PUT"))
                .and(path("/v1/metrics/met-1"))
                .and(body_json(json!({"description": "Billable API calls"}))),
            200,
            json!({ "metric": metric_json("met-1") }),
        )
        .await;
    harness
        .respond(
            Mock::given(method("DELETE")).and(path("/v1/metrics/met-1")),
            200,
            json!({"message": "metric deleted"}),
        )
        .await;

    let metrics = harness.client.metrics();
    let id = MetricId::new("met-1");

    let listed = metrics.list().await.unwrap();
    assert_eq!(listed.metrics[0].aggregation, Aggregation::Count);

    let update = UpdateMetricRequest {
        description: Some("Billable API calls".into()),
        ..Default::default()
    };
    metrics.update(&id, &update).await.unwrap();
    metrics.delete(&id).await.unwrap();
}

#[tokio::test]
async fn get_metric() {
    let harness = TestHarness::new().await;
    harness
        .respond(
            Mock::given(method("GET")).and(path("/v1/metrics/met-1")),
            200,
            json!({ "metric": metric_json("met-1") }),
        )
        .await;

    let metric = harness
        .client
        .metrics()
        .get(&MetricId::new("met-1"))
        .await
        .unwrap();

    assert_eq!(metric.id, MetricId::new("met-1"));
    assert_eq!(metric.aggregation, Aggregation::Count);
}

#[tokio::test]
async fn missing_metric_is_not_found() {
    let harness = TestHarness::new().await;
    harness
        .respond_error(
            Mock::given(method("GET")).and(path("/v1/metrics/met-404")),
            404,
            "metric not found",
        )
        .await;

    let err = harness
        .client
        .metrics()
        .get(&MetricId::new("met-404"))
        .await
        .unwrap_err();

    assert!(is_not_found(&err));
}
