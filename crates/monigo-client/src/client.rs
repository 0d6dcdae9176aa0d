//! Monigo HTTP client.

use std::fmt;

use crate::config::{ClientOptions, ENV_API_KEY};
use crate::error::ClientError;
use crate::resources::{
    Customers, Events, Invoices, Metrics, PayoutAccounts, Plans, PortalTokens, Subscriptions,
    Usage,
};

/// Monigo API client.
///
/// Holds the API key, base URL and HTTP executor. It is immutable after
/// construction; clone it freely to share between tasks (clones share the
/// underlying connection pool).
///
/// Endpoints are grouped into resource facades: [`customers`](Self::customers),
/// [`events`](Self::events), [`invoices`](Self::invoices), ...
#[derive(Clone)]
pub struct MonigoClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) user_agent: String,
}

impl MonigoClient {
    /// Create a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the API key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(api_key, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the API key is blank, the
    /// base URL is not an http(s) URL, or the HTTP client cannot be built.
    pub fn with_options(
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClientError::Configuration("API key must not be empty".into()));
        }

        let base_url = options.normalized_base_url()?;
        let http = options.build_http_client()?;

        tracing::debug!(base_url = %base_url, "Monigo client configured");

        Ok(Self {
            http,
            base_url,
            api_key,
            user_agent: options.user_agent,
        })
    }

    /// Create a client from `MONIGO_API_KEY`, `MONIGO_BASE_URL` and
    /// `MONIGO_TIMEOUT_SECONDS`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if `MONIGO_API_KEY` is unset or
    /// any variable holds an invalid value.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| ClientError::Configuration(format!("{ENV_API_KEY} is not set")))?;
        Self::with_options(api_key, ClientOptions::from_env()?)
    }

    /// Base URL requests are sent to, without a trailing `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Customer endpoints.
    #[must_use]
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// Billing metric endpoints.
    #[must_use]
    pub fn metrics(&self) -> Metrics<'_> {
        Metrics::new(self)
    }

    /// Plan endpoints.
    #[must_use]
    pub fn plans(&self) -> Plans<'_> {
        Plans::new(self)
    }

    /// Subscription endpoints.
    #[must_use]
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    /// Payout account endpoints.
    #[must_use]
    pub fn payout_accounts(&self) -> PayoutAccounts<'_> {
        PayoutAccounts::new(self)
    }

    /// Invoice endpoints.
    #[must_use]
    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    /// Usage rollup queries.
    #[must_use]
    pub fn usage(&self) -> Usage<'_> {
        Usage::new(self)
    }

    /// Customer portal token endpoints.
    #[must_use]
    pub fn portal_tokens(&self) -> PortalTokens<'_> {
        PortalTokens::new(self)
    }

    /// Event ingestion and replay endpoints.
    #[must_use]
    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }
}

impl fmt::Debug for MonigoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonigoClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = MonigoClient::new("sk_test_key").unwrap();
        assert_eq!(client.base_url(), "https://api.monigo.co");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client =
            MonigoClient::with_options("sk_test_key", ClientOptions::with_base_url("http://localhost:8000/"))
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn blank_api_key_is_rejected() {
        for key in ["", "   "] {
            let err = MonigoClient::new(key).unwrap_err();
            assert!(matches!(err, ClientError::Configuration(_)));
        }
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = MonigoClient::with_options("sk_test_key", ClientOptions::with_base_url("::nope"))
            .unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = MonigoClient::new("sk_live_secret").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("sk_live_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<MonigoClient>();
    }
}
