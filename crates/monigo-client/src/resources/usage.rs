//! Usage rollup queries.

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::ApiRequest;
use crate::types::{rfc3339, UsageParams, UsageQueryResult};

const PATH: &str = "/v1/usage";

/// Read aggregated usage.
#[derive(Debug, Clone, Copy)]
pub struct Usage<'a> {
    client: &'a MonigoClient,
}

impl<'a> Usage<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Query per-customer, per-metric rollups.
    ///
    /// With no filters set the server returns the current billing period.
    /// Time bounds are sent as RFC 3339 UTC timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn query(&self, params: &UsageParams) -> Result<UsageQueryResult, ClientError> {
        let request = ApiRequest::get(PATH)
            .query_opt("customer_id", params.customer_id.as_ref())
            .query_opt("metric_id", params.metric_id.as_ref())
            .query_opt("from", params.from.as_ref().map(rfc3339))
            .query_opt("to", params.to.as_ref().map(rfc3339));
        required(self.client.execute(request).await?, PATH)
    }
}
