//! Customer portal token endpoints.

use monigo_core::{CustomerId, PortalToken, PortalTokenId};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::{ApiRequest, RequestOptions};
use crate::types::{CreatePortalTokenRequest, ListPortalTokensResponse};

const PATH: &str = "/v1/portal/tokens";

/// Issue and revoke shareable customer portal links.
#[derive(Debug, Clone, Copy)]
pub struct PortalTokens<'a> {
    client: &'a MonigoClient,
}

impl<'a> PortalTokens<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Create a portal link for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(
        &self,
        request: &CreatePortalTokenRequest,
    ) -> Result<PortalToken, ClientError> {
        self.create_with_options(request, RequestOptions::default())
            .await
    }

    /// [`create`](Self::create) with per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_with_options(
        &self,
        request: &CreatePortalTokenRequest,
        options: RequestOptions,
    ) -> Result<PortalToken, ClientError> {
        let request = ApiRequest::post(PATH).json(request)?.with_options(options);
        self.client.execute_enveloped(request, "token").await
    }

    /// List a customer's portal tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(&self, customer_id: &CustomerId) -> Result<ListPortalTokensResponse, ClientError> {
        let request = ApiRequest::get(PATH).query("customer_id", customer_id);
        required(self.client.execute(request).await?, PATH)
    }

    /// Revoke a portal token. The link stops working immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn revoke(&self, token_id: &PortalTokenId) -> Result<(), ClientError> {
        let path = format!("{PATH}/{}", token_id.path_segment()?);
        self.client.execute_unit(ApiRequest::delete(path)).await
    }
}
