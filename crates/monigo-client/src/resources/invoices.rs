//! Invoice endpoints.

use monigo_core::{Invoice, InvoiceId, SubscriptionId};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::{ApiRequest, RequestOptions};
use crate::types::{GenerateInvoiceRequest, ListInvoicesParams, ListInvoicesResponse};

const PATH: &str = "/v1/invoices";

/// Generate and manage invoices.
///
/// Invoices move from draft to finalized to paid or void. Finalizing and
/// voiding are explicit calls; the client never advances an invoice on its own.
#[derive(Debug, Clone, Copy)]
pub struct Invoices<'a> {
    client: &'a MonigoClient,
}

impl<'a> Invoices<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Generate a draft invoice from a subscription's current period usage.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn generate(&self, subscription_id: &SubscriptionId) -> Result<Invoice, ClientError> {
        self.generate_with_options(subscription_id, RequestOptions::default())
            .await
    }

    /// [`generate`](Self::generate) with per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn generate_with_options(
        &self,
        subscription_id: &SubscriptionId,
        options: RequestOptions,
    ) -> Result<Invoice, ClientError> {
        let request = ApiRequest::post(format!("{PATH}/generate"))
            .json(&GenerateInvoiceRequest { subscription_id })?
            .with_options(options);
        self.client.execute_enveloped(request, "invoice").await
    }

    /// List invoices, filtered by status and/or customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(&self, params: &ListInvoicesParams) -> Result<ListInvoicesResponse, ClientError> {
        let request = ApiRequest::get(PATH)
            .query_opt("status", params.status)
            .query_opt("customer_id", params.customer_id.as_ref());
        required(self.client.execute(request).await?, PATH)
    }

    /// Fetch one invoice with its line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get(&self, invoice_id: &InvoiceId) -> Result<Invoice, ClientError> {
        let request = ApiRequest::get(item_path(invoice_id, "")?);
        self.client.execute_enveloped(request, "invoice").await
    }

    /// Finalize a draft invoice, making it ready for payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn finalize(&self, invoice_id: &InvoiceId) -> Result<Invoice, ClientError> {
        self.finalize_with_options(invoice_id, RequestOptions::default())
            .await
    }

    /// [`finalize`](Self::finalize) with per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn finalize_with_options(
        &self,
        invoice_id: &InvoiceId,
        options: RequestOptions,
    ) -> Result<Invoice, ClientError> {
        let request = ApiRequest::post(item_path(invoice_id, "/finalize")?).with_options(options);
        self.client.execute_enveloped(request, "invoice").await
    }

    /// Void an invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn void(&self, invoice_id: &InvoiceId) -> Result<Invoice, ClientError> {
        self.void_with_options(invoice_id, RequestOptions::default())
            .await
    }

    /// [`void`](Self::void) with per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn void_with_options(
        &self,
        invoice_id: &InvoiceId,
        options: RequestOptions,
    ) -> Result<Invoice, ClientError> {
        let request = ApiRequest::post(item_path(invoice_id, "/void")?).with_options(options);
        self.client.execute_enveloped(request, "invoice").await
    }
}

fn item_path(invoice_id: &InvoiceId, action: &str) -> Result<String, ClientError> {
    Ok(format!("{PATH}/{}{action}", invoice_id.path_segment()?))
}
