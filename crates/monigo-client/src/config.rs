//! Client configuration.

use std::time::Duration;

use crate::error::ClientError;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.monigo.co";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "MONIGO_API_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "MONIGO_BASE_URL";

/// Environment variable overriding the timeout, in whole seconds.
pub const ENV_TIMEOUT_SECONDS: &str = "MONIGO_TIMEOUT_SECONDS";

/// Client options for customization.
///
/// Every field has a default; override only what you need:
///
/// ```
/// use std::time::Duration;
/// use monigo_client::ClientOptions;
///
/// let options = ClientOptions {
///     base_url: "http://localhost:8000".into(),
///     timeout: Duration::from_secs(5),
///     ..ClientOptions::default()
/// };
/// assert_eq!(options.user_agent, ClientOptions::default().user_agent);
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL (default: `https://api.monigo.co`). A trailing `/` is ignored.
    pub base_url: String,

    /// Timeout applied to every request (default: 30 seconds).
    ///
    /// Ignored when `http_client` is set; configure the supplied client instead.
    pub timeout: Duration,

    /// Pre-built HTTP client to send requests with (proxies, TLS, pooling).
    pub http_client: Option<reqwest::Client>,

    /// `User-Agent` header value (default: `monigo-rust/<version>`).
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
            user_agent: concat!("monigo-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Create options pointing at a different base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read options from `MONIGO_BASE_URL` and `MONIGO_TIMEOUT_SECONDS`.
    ///
    /// Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the timeout is not a whole
    /// number of seconds.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClientError> {
        let mut options = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            options.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECONDS).filter(|v| !v.trim().is_empty()) {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Configuration(format!(
                    "{ENV_TIMEOUT_SECONDS} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            options.timeout = Duration::from_secs(seconds);
        }

        Ok(options)
    }

    /// Validate the base URL and return it without a trailing `/`.
    pub(crate) fn normalized_base_url(&self) -> Result<String, ClientError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| {
            ClientError::Configuration(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Configuration(format!(
                "base URL must use http or https, got {:?}",
                self.base_url
            )));
        }
        Ok(trimmed.to_string())
    }

    /// Build the HTTP executor for these options.
    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, ClientError> {
        if let Some(client) = &self.http_client {
            return Ok(client.clone());
        }
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))
    }
}
