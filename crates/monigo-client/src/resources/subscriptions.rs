//! Subscription endpoints.

use monigo_core::{Subscription, SubscriptionId, SubscriptionStatus};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::ApiRequest;
use crate::types::{
    CreateSubscriptionRequest, ListSubscriptionsParams, ListSubscriptionsResponse,
    UpdateSubscriptionStatusRequest,
};

const PATH: &str = "/v1/subscriptions";

/// Link customers to plans.
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a MonigoClient,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Subscribe a customer to a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error;
    /// [`is_conflict`](crate::is_conflict) matches when the customer already
    /// has an active subscription to the plan.
    pub async fn create(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<Subscription, ClientError> {
        let request = ApiRequest::post(PATH).json(request)?;
        self.client.execute_enveloped(request, "subscription").await
    }

    /// List subscriptions, filtered by any of customer, plan and status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: &ListSubscriptionsParams,
    ) -> Result<ListSubscriptionsResponse, ClientError> {
        let request = ApiRequest::get(PATH)
            .query_opt("customer_id", params.customer_id.as_ref())
            .query_opt("plan_id", params.plan_id.as_ref())
            .query_opt("status", params.status);
        required(self.client.execute(request).await?, PATH)
    }

    /// Fetch one subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self, subscription_id: &SubscriptionId) -> Result<Subscription, ClientError> {
        let request = ApiRequest::get(item_path(subscription_id)?);
        self.client.execute_enveloped(request, "subscription").await
    }

    /// Pause, resume or cancel a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update_status(
        &self,
        subscription_id: &SubscriptionId,
        status: SubscriptionStatus,
    ) -> Result<Subscription, ClientError> {
        let request = ApiRequest::patch(item_path(subscription_id)?)
            .json(&UpdateSubscriptionStatusRequest { status })?;
        self.client.execute_enveloped(request, "subscription").await
    }

    /// Delete a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(&self, subscription_id: &SubscriptionId) -> Result<(), ClientError> {
        self.client
            .execute_unit(ApiRequest::delete(item_path(subscription_id)?))
            .await
    }
}

fn item_path(subscription_id: &SubscriptionId) -> Result<String, ClientError> {
    Ok(format!("{PATH}/{}", subscription_id.path_segment()?))
}
