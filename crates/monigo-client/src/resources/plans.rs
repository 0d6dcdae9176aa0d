//! Plan endpoints.

use monigo_core::{Plan, PlanId};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::ApiRequest;
use crate::types::{CreatePlanRequest, ListPlansResponse, UpdatePlanRequest};

const PATH: &str = "/v1/plans";

/// Manage billing plans and their prices.
#[derive(Debug, Clone, Copy)]
pub struct Plans<'a> {
    client: &'a MonigoClient,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Create a plan, optionally with prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(&self, request: &CreatePlanRequest) -> Result<Plan, ClientError> {
        let request = ApiRequest::post(PATH).json(request)?;
        self.client.execute_enveloped(request, "plan").await
    }

    /// List all plans.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(&self) -> Result<ListPlansResponse, ClientError> {
        required(self.client.execute(ApiRequest::get(PATH)).await?, PATH)
    }

    /// Fetch one plan with its prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self, plan_id: &PlanId) -> Result<Plan, ClientError> {
        let request = ApiRequest::get(item_path(plan_id)?);
        self.client.execute_enveloped(request, "plan").await
    }

    /// Update a plan. Unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update(
        &self,
        plan_id: &PlanId,
        request: &UpdatePlanRequest,
    ) -> Result<Plan, ClientError> {
        let request = ApiRequest::put(item_path(plan_id)?).json(request)?;
        self.client.execute_enveloped(request, "plan").await
    }

    /// Delete a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(&self, plan_id: &PlanId) -> Result<(), ClientError> {
        self.client
            .execute_unit(ApiRequest::delete(item_path(plan_id)?))
            .await
    }
}

fn item_path(plan_id: &PlanId) -> Result<String, ClientError> {
    Ok(format!("{PATH}/{}", plan_id.path_segment()?))
}
