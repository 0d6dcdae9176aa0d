//! Core types for the Monigo billing API.
//!
//! This crate mirrors the wire data model of the Monigo API:
//!
//! - **Identifiers**: `CustomerId`, `PlanId`, `InvoiceId`, `IdempotencyKey`, ...
//! - **Catalog**: `Metric`, `Plan`, `Price` and the pricing model configurations
//! - **Billing**: `Customer`, `Subscription`, `Invoice`, `PayoutAccount`
//! - **Usage**: `IngestEvent`, `UsageRollup`, `EventReplayJob`
//! - **Portal**: `PortalToken`
//!
//! # Decimal values
//!
//! Monetary amounts and quantities cross the wire as decimal strings
//! (`"1500.00"`, `"2.500000"`) and are held as [`Decimal`] so that no value
//! ever passes through floating point.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod wire;

pub mod customer;
pub mod error;
pub mod event;
pub mod ids;
pub mod invoice;
pub mod metric;
pub mod money;
pub mod nullable;
pub mod payout;
pub mod plan;
pub mod portal;
pub mod subscription;
pub mod usage;

pub use customer::Customer;
pub use error::{IdError, ParseEnumError};
pub use event::{EventReplayJob, IngestEvent, IngestResponse, ReplayStatus};
pub use ids::{
    CustomerId, IdempotencyKey, InvoiceId, LineItemId, MetricId, OrgId, PayoutAccountId,
    PlanId, PortalTokenId, PriceId, ReplayJobId, RollupId, SubscriptionId,
};
pub use invoice::{Invoice, InvoiceLineItem, InvoiceStatus};
pub use metric::{Aggregation, Metric};
pub use payout::{PayoutAccount, PayoutMethod};
pub use plan::{
    BillingPeriod, OverageConfig, PackageConfig, Plan, PlanType, Price, PriceTier, PricingModel,
};
pub use portal::PortalToken;
pub use rust_decimal::Decimal;
pub use subscription::{Subscription, SubscriptionStatus};
pub use usage::UsageRollup;
