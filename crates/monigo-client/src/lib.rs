//! Monigo Client SDK.
//!
//! An async client for the Monigo usage-based billing API: ingest usage
//! events, manage customers, metrics, plans, subscriptions and payout
//! accounts, generate invoices, query usage and issue customer portal links.
//!
//! # Example
//!
//! ```no_run
//! use monigo_client::{
//!     is_quota_exceeded, CustomerId, IngestEvent, IngestRequest, MonigoClient,
//! };
//!
//! # async fn example() -> Result<(), monigo_client::ClientError> {
//! let client = MonigoClient::from_env()?;
//!
//! let event = IngestEvent::new("api_call", CustomerId::new("cust-abc"))
//!     .with_property("endpoint", "/v1/users");
//!
//! match client.events().ingest(&IngestRequest::from(vec![event])).await {
//!     Ok(response) => println!("ingested {}", response.ingested.len()),
//!     Err(err) if is_quota_exceeded(&err) => println!("quota exhausted"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns [`ClientError`]. Server rejections are
//! [`ClientError::Api`]; classify them with the `is_*` predicates, which are
//! safe to call on any error (or on `Ok`/`None`).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
pub mod resources;
mod transport;
mod types;

pub use client::MonigoClient;
pub use config::{
    ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_API_KEY, ENV_BASE_URL,
    ENV_TIMEOUT_SECONDS,
};
pub use error::{
    is_conflict, is_forbidden, is_not_found, is_quota_exceeded, is_rate_limited,
    is_unauthorized, is_validation_error, ApiError, ApiErrorKind, AsApiError, ClientError,
};
pub use transport::{ApiRequest, RequestOptions, IDEMPOTENCY_KEY_HEADER};
pub use types::*;

pub use monigo_core;
pub use monigo_core::{
    Aggregation, BillingPeriod, Customer, CustomerId, Decimal, EventReplayJob, IdempotencyKey,
    IngestEvent, IngestResponse, Invoice, InvoiceId, InvoiceLineItem, InvoiceStatus, Metric,
    MetricId, OverageConfig, PackageConfig, PayoutAccount, PayoutAccountId, PayoutMethod, Plan,
    PlanId, PlanType, PortalToken, PortalTokenId, Price, PriceId, PriceTier, PricingModel,
    ReplayJobId, ReplayStatus, Subscription, SubscriptionId, SubscriptionStatus, UsageRollup,
};
