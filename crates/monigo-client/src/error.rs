//! Client error types and error classification.
//!
//! Every failure is one [`ClientError`]. Only [`ClientError::Api`] carries an
//! HTTP status; the `is_*` predicates classify it and return `false` for
//! everything else, so they can be chained without guard clauses:
//!
//! ```
//! use monigo_client::{is_not_found, is_rate_limited, ClientError};
//!
//! fn describe(result: &Result<(), ClientError>) -> &'static str {
//!     if is_not_found(result) {
//!         "missing"
//!     } else if is_rate_limited(result) {
//!         "back off and retry"
//!     } else if result.is_err() {
//!         "failed"
//!     } else {
//!         "ok"
//!     }
//! }
//! # assert_eq!(describe(&Ok(())), "ok");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use monigo_core::IdError;
use serde::Deserialize;

/// Errors that can occur when using the Monigo client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an HTTP status >= 400.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never completed (DNS, connection, TLS or IO failure).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete before its deadline.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The request body could not be serialized; nothing was sent.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not be built (bad path, identifier or header); nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A 2xx response body did not match the expected shape.
    #[error("decode error: {source}")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// The response body that failed to decode.
        body: String,
    },

    /// A 2xx response was missing the expected payload.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map a `reqwest` send/read failure to the transport kinds.
    pub(crate) fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else if error.is_builder() {
            Self::InvalidRequest(error.to_string())
        } else {
            Self::Transport(error)
        }
    }

    /// The structured API error, if this is one.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// HTTP status code of an API error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(|error| error.status_code)
    }

    /// Classification of an API error.
    #[must_use]
    pub fn kind(&self) -> Option<ApiErrorKind> {
        self.api_error().and_then(ApiError::kind)
    }

    /// Check for a 404 API error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        is_not_found(self)
    }

    /// Check for a 401 API error.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        is_unauthorized(self)
    }

    /// Check for a 403 API error.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        is_forbidden(self)
    }

    /// Check for a 409 API error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        is_conflict(self)
    }

    /// Check for a 429 API error.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        is_rate_limited(self)
    }

    /// Check for a 402 API error.
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        is_quota_exceeded(self)
    }

    /// Check for a 400 API error with field-level details.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        is_validation_error(self)
    }

    /// Whether the same request may succeed if sent again later.
    ///
    /// True for rate limiting, timeouts and transport failures. The client
    /// never retries on its own.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Transport(_)) || self.is_rate_limited()
    }
}

impl From<IdError> for ClientError {
    fn from(error: IdError) -> Self {
        Self::InvalidRequest(format!("invalid identifier: {error}"))
    }
}

/// An HTTP 4xx/5xx response from the Monigo API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("HTTP {status_code}: {message}{}", DetailsSuffix(.details))]
pub struct ApiError {
    /// HTTP status code.
    pub status_code: u16,
    /// Server-supplied message, or the raw body when it was not an error envelope.
    pub message: String,
    /// Field-level validation errors.
    pub details: BTreeMap<String, String>,
}

/// Wire shape of an error response: `{"error": "...", "details": {...}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
    #[serde(default)]
    details: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// Create an API error without details.
    #[must_use]
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Add a field-level detail.
    #[must_use]
    pub fn with_detail(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.details.insert(field.into(), message.into());
        self
    }

    /// Build an API error from a response status and body.
    ///
    /// Bodies that are not an error envelope become the message verbatim.
    #[must_use]
    pub fn from_response(status_code: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Self {
                status_code,
                message: envelope.error,
                details: envelope.details.unwrap_or_default(),
            },
            Err(_) => Self::new(status_code, String::from_utf8_lossy(body)),
        }
    }

    /// Classification of this error, if its status has one.
    ///
    /// At most one kind matches any error; a 400 without details has none.
    #[must_use]
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self.status_code {
            400 if !self.details.is_empty() => Some(ApiErrorKind::Validation),
            401 => Some(ApiErrorKind::Unauthorized),
            402 => Some(ApiErrorKind::QuotaExceeded),
            403 => Some(ApiErrorKind::Forbidden),
            404 => Some(ApiErrorKind::NotFound),
            409 => Some(ApiErrorKind::Conflict),
            429 => Some(ApiErrorKind::RateLimited),
            _ => None,
        }
    }

    /// Whether the status is a 5xx.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Check for status 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ApiErrorKind::NotFound)
    }

    /// Check for status 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Unauthorized)
    }

    /// Check for status 403.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Forbidden)
    }

    /// Check for status 409.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Conflict)
    }

    /// Check for status 429.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.kind() == Some(ApiErrorKind::RateLimited)
    }

    /// Check for status 402.
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        self.kind() == Some(ApiErrorKind::QuotaExceeded)
    }

    /// Check for status 400 with field-level details.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.kind() == Some(ApiErrorKind::Validation)
    }
}

/// Renders validation details as ` (field: message, ...)`.
struct DetailsSuffix<'a>(&'a BTreeMap<String, String>);

impl fmt::Display for DetailsSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" (")?;
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        f.write_str(")")
    }
}

/// Recognised API error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400 with field-level details.
    Validation,
    /// 401: missing or invalid API key.
    Unauthorized,
    /// 402: ingestion quota exhausted.
    QuotaExceeded,
    /// 403: key lacks the required scope.
    Forbidden,
    /// 404: resource does not exist.
    NotFound,
    /// 409: conflicting state, e.g. a duplicate active subscription.
    Conflict,
    /// 429: too many requests.
    RateLimited,
}

/// Access to a structured API error inside an arbitrary error value.
///
/// Implemented for the client's own errors, for `Option` (where `None` is "no
/// error"), for `Result` (where `Ok` is "no error"), for references, and for
/// `dyn Error` values, whose source chain is searched.
pub trait AsApiError {
    /// The API error carried by this value, if any.
    fn as_api_error(&self) -> Option<&ApiError>;
}

impl AsApiError for ApiError {
    fn as_api_error(&self) -> Option<&ApiError> {
        Some(self)
    }
}

impl AsApiError for ClientError {
    fn as_api_error(&self) -> Option<&ApiError> {
        self.api_error()
    }
}

impl<T: AsApiError + ?Sized> AsApiError for &T {
    fn as_api_error(&self) -> Option<&ApiError> {
        (**self).as_api_error()
    }
}

impl<T: AsApiError> AsApiError for Option<T> {
    fn as_api_error(&self) -> Option<&ApiError> {
        self.as_ref().and_then(AsApiError::as_api_error)
    }
}

impl<T, E: AsApiError> AsApiError for Result<T, E> {
    fn as_api_error(&self) -> Option<&ApiError> {
        self.as_ref().err().and_then(AsApiError::as_api_error)
    }
}

impl AsApiError for dyn std::error::Error + 'static {
    fn as_api_error(&self) -> Option<&ApiError> {
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(self);
        while let Some(error) = current {
            if let Some(api) = error.downcast_ref::<ApiError>() {
                return Some(api);
            }
            if let Some(ClientError::Api(api)) = error.downcast_ref::<ClientError>() {
                return Some(api);
            }
            current = error.source();
        }
        None
    }
}

impl AsApiError for dyn std::error::Error + Send + Sync + 'static {
    fn as_api_error(&self) -> Option<&ApiError> {
        let error: &(dyn std::error::Error + 'static) = self;
        error.as_api_error()
    }
}

fn has_status<E: AsApiError + ?Sized>(err: &E, status_code: u16) -> bool {
    err.as_api_error()
        .is_some_and(|api| api.status_code == status_code)
}

/// Returns true if `err` is an API error with status 404.
pub fn is_not_found<E: AsApiError + ?Sized>(err: &E) -> bool {
    has_status(err, 404)
}

/// Returns true if `err` is an API error with status 401.
pub fn is_unauthorized<E: AsApiError + ?Sized>(err: &E) -> bool {
    has_status(err, 401)
}

/// Returns true if `err` is an API error with status 403.
pub fn is_forbidden<E: AsApiError + ?Sized>(err: &E) -> bool {
    has_status(err, 403)
}

/// Returns true if `err` is an API error with status 409.
///
/// Returned when a customer already has an active subscription.
pub fn is_conflict<E: AsApiError + ?Sized>(err: &E) -> bool {
    has_status(err, 409)
}

/// Returns true if `err` is an API error with status 429.
pub fn is_rate_limited<E: AsApiError + ?Sized>(err: &E) -> bool {
    has_status(err, 429)
}

/// Returns true if `err` is an API error with status 402.
///
/// Returned when the organisation's event quota is exhausted.
pub fn is_quota_exceeded<E: AsApiError + ?Sized>(err: &E) -> bool {
    has_status(err, 402)
}

/// Returns true if `err` is an API error with status 400 and non-empty details.
pub fn is_validation_error<E: AsApiError + ?Sized>(err: &E) -> bool {
    err.as_api_error()
        .is_some_and(|api| api.status_code == 400 && !api.details.is_empty())
}
