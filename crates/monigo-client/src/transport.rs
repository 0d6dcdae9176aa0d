//! Request envelope and the single HTTP round trip every operation goes through.
//!
//! Resource facades build an [`ApiRequest`] and hand it to one of the
//! executors on [`MonigoClient`]. The executors are public so endpoints the
//! facades do not cover yet can still be called:
//!
//! ```no_run
//! use monigo_client::{ApiRequest, MonigoClient};
//!
//! # async fn example(client: &MonigoClient) -> Result<(), monigo_client::ClientError> {
//! let request = ApiRequest::get("/v1/customers").query("limit", 10);
//! let raw: Option<serde_json::Value> = client.execute(request).await?;
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use monigo_core::IdempotencyKey;
use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::MonigoClient;
use crate::error::{ApiError, ClientError};

/// Header carrying a per-request idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Per-call overrides for a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Sent as the `Idempotency-Key` header.
    pub idempotency_key: Option<IdempotencyKey>,

    /// Deadline for this request only, overriding the client timeout.
    pub timeout: Option<Duration>,

    /// Additional headers.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the idempotency key.
    #[must_use]
    pub fn with_idempotency_key(mut self, key: impl Into<IdempotencyKey>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Set a per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A single API call: method, path, query, optional JSON body and overrides.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    options: RequestOptions,
}

impl ApiRequest {
    /// Create a request. `path` is appended to the base URL and must begin with `/`.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when `value` is set and not blank.
    #[must_use]
    pub fn query_opt(mut self, key: impl Into<String>, value: Option<impl Display>) -> Self {
        if let Some(value) = value.map(|v| v.to_string()) {
            if !value.trim().is_empty() {
                self.query.push((key.into(), value));
            }
        }
        self
    }

    /// Attach a JSON body, serializing it now.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Serialization`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_vec(body).map_err(ClientError::Serialization)?);
        Ok(self)
    }

    /// Apply per-call overrides.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters, in insertion order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Serialized JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl MonigoClient {
    /// Send a request and decode the response body into `T`.
    ///
    /// Returns `Ok(None)` for a successful response with an empty body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidRequest`] if the request cannot be built (nothing is sent)
    /// - [`ClientError::Transport`] or [`ClientError::Timeout`] if no response arrives
    /// - [`ClientError::Api`] for HTTP status >= 400
    /// - [`ClientError::Decode`] if a non-empty success body is not a `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, ClientError> {
        let body = self.round_trip(request).await?;
        decode_body(&body)
    }

    /// Send a request, discarding any response body.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), minus decoding.
    pub async fn execute_unit(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.round_trip(request).await.map(drop)
    }

    /// Send a request and unwrap the value under `key` in a single-key envelope
    /// such as `{"customer": {...}}`.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute); additionally
    /// [`ClientError::UnexpectedResponse`] if the body is empty or has no `key`.
    pub async fn execute_enveloped<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        key: &str,
    ) -> Result<T, ClientError> {
        let envelope: Option<serde_json::Map<String, serde_json::Value>> =
            self.execute(request).await?;
        unwrap_envelope(envelope, key)
    }

    /// Send a request and return the raw success body.
    async fn round_trip(&self, request: ApiRequest) -> Result<Vec<u8>, ClientError> {
        let ApiRequest {
            method,
            path,
            query,
            body,
            options,
        } = request;

        if !path.starts_with('/') {
            return Err(ClientError::InvalidRequest(format!(
                "path must start with '/', got {path:?}"
            )));
        }
        let url = reqwest::Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ClientError::InvalidRequest(format!("invalid URL for {path:?}: {e}")))?;

        let mut builder = self
            .http
            .request(method.clone(), url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent);

        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        if let Some(key) = &options.idempotency_key {
            builder = builder.header(IDEMPOTENCY_KEY_HEADER, header_value(key.as_str())?);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidRequest(format!("invalid header {name:?}: {e}")))?;
            builder = builder.header(name, header_value(value)?);
        }

        tracing::debug!(method = %method, path = %path, "Sending Monigo API request");
        let started = Instant::now();

        let response = builder.send().await.map_err(ClientError::from_reqwest)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::from_reqwest)?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Monigo API response"
        );

        if status.as_u16() >= 400 {
            let error = ApiError::from_response(status.as_u16(), &bytes);
            tracing::warn!(
                method = %method,
                path = %path,
                status = error.status_code,
                message = %error.message,
                "Monigo API error"
            );
            return Err(error.into());
        }

        Ok(bytes.to_vec())
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid header value: {e}")))
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ClientError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|source| ClientError::Decode {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        })
}

fn unwrap_envelope<T: DeserializeOwned>(
    envelope: Option<serde_json::Map<String, serde_json::Value>>,
    key: &str,
) -> Result<T, ClientError> {
    let mut envelope = envelope.ok_or_else(|| {
        ClientError::UnexpectedResponse(format!("empty response body, expected {key:?}"))
    })?;
    let value = envelope.remove(key).ok_or_else(|| {
        ClientError::UnexpectedResponse(format!("response has no {key:?} field"))
    })?;
    let text = value.to_string();
    serde_json::from_value(value).map_err(|source| ClientError::Decode { source, body: text })
}
