//! Payout account endpoints, nested under a customer.

use monigo_core::{CustomerId, PayoutAccount, PayoutAccountId};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::ApiRequest;
use crate::types::{
    CreatePayoutAccountRequest, ListPayoutAccountsResponse, UpdatePayoutAccountRequest,
};

/// Bank and mobile-money accounts a customer can be paid out to.
#[derive(Debug, Clone, Copy)]
pub struct PayoutAccounts<'a> {
    client: &'a MonigoClient,
}

impl<'a> PayoutAccounts<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Add a payout account to a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(
        &self,
        customer_id: &CustomerId,
        request: &CreatePayoutAccountRequest,
    ) -> Result<PayoutAccount, ClientError> {
        let request = ApiRequest::post(collection_path(customer_id)?).json(request)?;
        self.client.execute_enveloped(request, "payout_account").await
    }

    /// List a customer's payout accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        customer_id: &CustomerId,
    ) -> Result<ListPayoutAccountsResponse, ClientError> {
        let path = collection_path(customer_id)?;
        required(self.client.execute(ApiRequest::get(path.as_str())).await?, &path)
    }

    /// Fetch one payout account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(
        &self,
        customer_id: &CustomerId,
        account_id: &PayoutAccountId,
    ) -> Result<PayoutAccount, ClientError> {
        let request = ApiRequest::get(item_path(customer_id, account_id)?);
        self.client.execute_enveloped(request, "payout_account").await
    }

    /// Update a payout account. Unset fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn update(
        &self,
        customer_id: &CustomerId,
        account_id: &PayoutAccountId,
        request: &UpdatePayoutAccountRequest,
    ) -> Result<PayoutAccount, ClientError> {
        let request = ApiRequest::put(item_path(customer_id, account_id)?).json(request)?;
        self.client.execute_enveloped(request, "payout_account").await
    }

    /// Delete a payout account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(
        &self,
        customer_id: &CustomerId,
        account_id: &PayoutAccountId,
    ) -> Result<(), ClientError> {
        self.client
            .execute_unit(ApiRequest::delete(item_path(customer_id, account_id)?))
            .await
    }
}

fn collection_path(customer_id: &CustomerId) -> Result<String, ClientError> {
    Ok(format!(
        "/v1/customers/{}/payout-accounts",
        customer_id.path_segment()?
    ))
}

fn item_path(customer_id: &CustomerId, account_id: &PayoutAccountId) -> Result<String, ClientError> {
    Ok(format!(
        "{}/{}",
        collection_path(customer_id)?,
        account_id.path_segment()?
    ))
}
