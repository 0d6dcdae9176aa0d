//! Billing metric endpoints.

use monigo_core::{Metric, MetricId};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::ApiRequest;
use crate::types::{CreateMetricRequest, ListMetricsResponse, UpdateMetricRequest};

const PATH: &str = "/v1/metrics";

/// Manage the metrics that turn raw events into billable quantities.
#[derive(Debug, Clone, Copy)]
pub struct Metrics<'a> {
    client: &'a MonigoClient,
}

impl<'a> Metrics<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Create a metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(&self, request: &CreateMetricRequest) -> Result<Metric, ClientError> {
        let request = ApiRequest::post(PATH).json(request)?;
        self.client.execute_enveloped(request, "metric").await
    }

    /// List all metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(&self) -> Result<ListMetricsResponse, ClientError> {
        required(self.client.execute(ApiRequest::get(PATH)).await?, PATH)
    }

    /// Fetch one metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self, metric_id: &MetricId) -> Result<Metric, ClientError> {
        let request = ApiRequest::get(item_path(metric_id)?);
        self.client.execute_enveloped(request, "metric").await
    }

    /// Update a metric. Unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update(
        &self,
        metric_id: &MetricId,
        request: &UpdateMetricRequest,
    ) -> Result<Metric, ClientError> {
        let request = ApiRequest::put(item_path(metric_id)?).json(request)?;
        self.client.execute_enveloped(request, "metric").await
    }

    /// Delete a metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(&self, metric_id: &MetricId) -> Result<(), ClientError> {
        self.client
            .execute_unit(ApiRequest::delete(item_path(metric_id)?))
            .await
    }
}

fn item_path(metric_id: &MetricId) -> Result<String, ClientError> {
    Ok(format!("{PATH}/{}", metric_id.path_segment()?))
}
