//! Customer endpoints.

use monigo_core::{Customer, CustomerId};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::ApiRequest;
use crate::types::{CreateCustomerRequest, ListCustomersResponse, UpdateCustomerRequest};

const PATH: &str = "/v1/customers";

/// Manage the end-customers in your organisation.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a MonigoClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(&self, request: &CreateCustomerRequest) -> Result<Customer, ClientError> {
        let request = ApiRequest::post(PATH).json(request)?;
        self.client.execute_enveloped(request, "customer").await
    }

    /// List all customers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(&self) -> Result<ListCustomersResponse, ClientError> {
        required(self.client.execute(ApiRequest::get(PATH)).await?, PATH)
    }

    /// Fetch one customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error;
    /// [`is_not_found`](crate::is_not_found) matches an unknown ID.
    pub async fn get(&self, customer_id: &CustomerId) -> Result<Customer, ClientError> {
        let request = ApiRequest::get(item_path(customer_id)?);
        self.client.execute_enveloped(request, "customer").await
    }

    /// Update a customer. Unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update(
        &self,
        customer_id: &CustomerId,
        request: &UpdateCustomerRequest,
    ) -> Result<Customer, ClientError> {
        let request = ApiRequest::put(item_path(customer_id)?).json(request)?;
        self.client.execute_enveloped(request, "customer").await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(&self, customer_id: &CustomerId) -> Result<(), ClientError> {
        self.client
            .execute_unit(ApiRequest::delete(item_path(customer_id)?))
            .await
    }
}

fn item_path(customer_id: &CustomerId) -> Result<String, ClientError> {
    Ok(format!("{PATH}/{}", customer_id.path_segment()?))
}
