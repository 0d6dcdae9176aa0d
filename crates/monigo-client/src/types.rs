//! Request bodies, query parameters and list responses.
//!
//! Optional request fields are omitted from the JSON body when unset, so an
//! update request only touches the fields you fill in.

use chrono::{DateTime, SecondsFormat, Utc};
use monigo_core::{
    Aggregation, BillingPeriod, Customer, CustomerId, Decimal, IngestEvent,
    Invoice, InvoiceStatus, Metric, MetricId, OverageConfig, PackageConfig, PayoutAccount,
    PayoutMethod, Plan, PlanId, PlanType, PortalToken, PriceId, PriceTier, PricingModel,
    Subscription, SubscriptionId, SubscriptionStatus, UsageRollup,
};
use serde::{Deserialize, Serialize, Serializer};

/// Format a timestamp as RFC 3339 in UTC with whole seconds (`2026-03-01T00:00:00Z`).
#[must_use]
pub fn rfc3339(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_rfc3339<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&rfc3339(timestamp))
}

// =============================================================================
// Customers
// =============================================================================

/// Body for `POST /v1/customers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCustomerRequest {
    /// The customer's ID in your own system.
    pub external_id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number in E.164 format (e.g. `+2348012345678`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Arbitrary JSON metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreateCustomerRequest {
    /// Create a request with the required fields.
    #[must_use]
    pub fn new(external_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
            email: None,
            phone: None,
            metadata: None,
        }
    }

    /// Set the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the metadata blob.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body for `PUT /v1/customers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCustomerRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Replacement metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Response of `GET /v1/customers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListCustomersResponse {
    /// Customers in the organisation.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub customers: Vec<Customer>,
    /// Number of customers returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Metrics
// =============================================================================

/// Body for `POST /v1/metrics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMetricRequest {
    /// Human-readable label (e.g. `"API Calls"`).
    pub name: String,
    /// `event_name` of the events this metric counts.
    pub event_name: String,
    /// How matching events are aggregated.
    pub aggregation: Aggregation,
    /// Optional documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event property aggregated by sum/max/minimum/average/unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation_property: Option<String>,
}

impl CreateMetricRequest {
    /// Create a request with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        event_name: impl Into<String>,
        aggregation: Aggregation,
    ) -> Self {
        Self {
            name: name.into(),
            event_name: event_name.into(),
            aggregation,
            description: None,
            aggregation_property: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the aggregated property.
    #[must_use]
    pub fn with_aggregation_property(mut self, property: impl Into<String>) -> Self {
        self.aggregation_property = Some(property.into());
        self
    }
}

/// Body for `PUT /v1/metrics/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateMetricRequest {
    /// New label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New tracked event name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// New aggregation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New aggregated property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation_property: Option<String>,
}

/// Response of `GET /v1/metrics`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListMetricsResponse {
    /// Metrics in the organisation.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub metrics: Vec<Metric>,
    /// Number of metrics returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Plans and prices
// =============================================================================

/// Model-specific price configuration, sent as the `tiers` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceConfig {
    /// Tier list for [`PricingModel::Tiered`].
    Tiers(Vec<PriceTier>),
    /// Bundle configuration for [`PricingModel::Package`].
    Package(PackageConfig),
    /// Included-units configuration for [`PricingModel::Overage`].
    Overage(OverageConfig),
    /// Any other JSON payload, passed through unchanged.
    Raw(serde_json::Value),
}

/// One price to attach to a plan.
///
/// Use the constructors so the model and its configuration always agree:
///
/// ```
/// use monigo_client::{CreatePriceRequest, Decimal, MetricId, PriceTier};
///
/// let price = CreatePriceRequest::tiered(
///     MetricId::new("met-1"),
///     vec![
///         PriceTier { up_to: Some(1000), unit_amount: Decimal::new(50, 2) },
///         PriceTier { up_to: None, unit_amount: Decimal::new(25, 2) },
///     ],
/// );
/// let json = serde_json::to_value(&price).unwrap();
/// assert_eq!(json["model"], "tiered");
/// assert_eq!(json["tiers"][1]["up_to"], serde_json::Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePriceRequest {
    /// Metric the price is based on.
    pub metric_id: MetricId,
    /// Pricing model.
    pub model: PricingModel,
    /// Per-unit price for the flat-unit and per-unit models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    /// Model-specific configuration for the tiered, package and overage models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<PriceConfig>,
}

impl CreatePriceRequest {
    fn with_model(metric_id: MetricId, model: PricingModel) -> Self {
        Self {
            metric_id,
            model,
            unit_price: None,
            tiers: None,
        }
    }

    /// The same price for every unit.
    #[must_use]
    pub fn flat(metric_id: MetricId, unit_price: Decimal) -> Self {
        Self {
            unit_price: Some(unit_price),
            ..Self::with_model(metric_id, PricingModel::FlatUnit)
        }
    }

    /// A per-unit price.
    #[must_use]
    pub fn per_unit(metric_id: MetricId, unit_price: Decimal) -> Self {
        Self {
            unit_price: Some(unit_price),
            ..Self::with_model(metric_id, PricingModel::PerUnit)
        }
    }

    /// Graduated prices; the last tier should have `up_to: None`.
    #[must_use]
    pub fn tiered(metric_id: MetricId, tiers: Vec<PriceTier>) -> Self {
        Self {
            tiers: Some(PriceConfig::Tiers(tiers)),
            ..Self::with_model(metric_id, PricingModel::Tiered)
        }
    }

    /// A price per bundle of units.
    #[must_use]
    pub fn package(metric_id: MetricId, config: PackageConfig) -> Self {
        Self {
            tiers: Some(PriceConfig::Package(config)),
            ..Self::with_model(metric_id, PricingModel::Package)
        }
    }

    /// A base fee covering an included quota, then a per-unit rate.
    #[must_use]
    pub fn overage(metric_id: MetricId, config: OverageConfig) -> Self {
        Self {
            tiers: Some(PriceConfig::Overage(config)),
            ..Self::with_model(metric_id, PricingModel::Overage)
        }
    }
}

/// A price change inside [`UpdatePlanRequest`]. Omit `id` to add a new price.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePriceRequest {
    /// Price to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PriceId>,
    /// New metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<MetricId>,
    /// New pricing model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<PricingModel>,
    /// New unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    /// New model-specific configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<PriceConfig>,
}

/// Body for `POST /v1/plans`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePlanRequest {
    /// Display name.
    pub name: String,
    /// Optional documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO 4217 currency code; the server defaults to `NGN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Plan type; the server defaults to collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<PlanType>,
    /// Invoice cadence; the server defaults to monthly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<BillingPeriod>,
    /// Prices to attach immediately.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<CreatePriceRequest>,
}

impl CreatePlanRequest {
    /// Create a request with server defaults for everything but the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            currency: None,
            plan_type: None,
            billing_period: None,
            prices: Vec::new(),
        }
    }

    /// Set the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the plan type.
    #[must_use]
    pub fn with_plan_type(mut self, plan_type: PlanType) -> Self {
        self.plan_type = Some(plan_type);
        self
    }

    /// Set the billing period.
    #[must_use]
    pub fn with_billing_period(mut self, billing_period: BillingPeriod) -> Self {
        self.billing_period = Some(billing_period);
        self
    }

    /// Attach a price.
    #[must_use]
    pub fn with_price(mut self, price: CreatePriceRequest) -> Self {
        self.prices.push(price);
        self
    }
}

/// Body for `PUT /v1/plans/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePlanRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// New plan type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<PlanType>,
    /// New billing period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<BillingPeriod>,
    /// Prices to add or change.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<UpdatePriceRequest>,
}

/// Response of `GET /v1/plans`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListPlansResponse {
    /// Plans in the organisation.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub plans: Vec<Plan>,
    /// Number of plans returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Subscriptions
// =============================================================================

/// Body for `POST /v1/subscriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSubscriptionRequest {
    /// Customer to subscribe.
    pub customer_id: CustomerId,
    /// Plan to subscribe to.
    pub plan_id: PlanId,
}

/// Filters for `GET /v1/subscriptions`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSubscriptionsParams {
    /// Only this customer's subscriptions.
    pub customer_id: Option<CustomerId>,
    /// Only subscriptions to this plan.
    pub plan_id: Option<PlanId>,
    /// Only subscriptions in this status.
    pub status: Option<SubscriptionStatus>,
}

#[derive(Serialize)]
pub(crate) struct UpdateSubscriptionStatusRequest {
    pub(crate) status: SubscriptionStatus,
}

/// Response of `GET /v1/subscriptions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListSubscriptionsResponse {
    /// Matching subscriptions.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub subscriptions: Vec<Subscription>,
    /// Number of subscriptions returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Payout accounts
// =============================================================================

/// Body for `POST /v1/customers/{id}/payout-accounts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePayoutAccountRequest {
    /// Name on the account.
    pub account_name: String,
    /// Bank transfer or mobile money.
    pub payout_method: PayoutMethod,
    /// Bank name (bank transfer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Bank sort/routing code (bank transfer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Account number (bank transfer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Wallet number (mobile money).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_money_number: Option<String>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Make this the customer's default payout account.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_default: bool,
    /// Arbitrary JSON metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CreatePayoutAccountRequest {
    fn with_method(account_name: String, payout_method: PayoutMethod) -> Self {
        Self {
            account_name,
            payout_method,
            bank_name: None,
            bank_code: None,
            account_number: None,
            mobile_money_number: None,
            currency: None,
            is_default: false,
            metadata: None,
        }
    }

    /// A bank account.
    #[must_use]
    pub fn bank_transfer(
        account_name: impl Into<String>,
        bank_name: impl Into<String>,
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            bank_name: Some(bank_name.into()),
            bank_code: Some(bank_code.into()),
            account_number: Some(account_number.into()),
            ..Self::with_method(account_name.into(), PayoutMethod::BankTransfer)
        }
    }

    /// A mobile money wallet.
    #[must_use]
    pub fn mobile_money(account_name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            mobile_money_number: Some(number.into()),
            ..Self::with_method(account_name.into(), PayoutMethod::MobileMoney)
        }
    }

    /// Set the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Mark as the default account.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Body for `PUT /v1/customers/{id}/payout-accounts/{account_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePayoutAccountRequest {
    /// New account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// New payout method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_method: Option<PayoutMethod>,
    /// New bank name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// New account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// New currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Change the default flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Replacement metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Response of `GET /v1/customers/{id}/payout-accounts`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListPayoutAccountsResponse {
    /// The customer's payout accounts.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub payout_accounts: Vec<PayoutAccount>,
    /// Number of accounts returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Invoices
// =============================================================================

#[derive(Serialize)]
pub(crate) struct GenerateInvoiceRequest<'a> {
    pub(crate) subscription_id: &'a SubscriptionId,
}

/// Filters for `GET /v1/invoices`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInvoicesParams {
    /// Only invoices in this status.
    pub status: Option<InvoiceStatus>,
    /// Only this customer's invoices.
    pub customer_id: Option<CustomerId>,
}

/// Response of `GET /v1/invoices`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListInvoicesResponse {
    /// Matching invoices.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub invoices: Vec<Invoice>,
    /// Number of invoices returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Usage
// =============================================================================

/// Filters for `GET /v1/usage`. Unset filters default to the current billing period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageParams {
    /// Only this customer's rollups.
    pub customer_id: Option<CustomerId>,
    /// Only this metric's rollups.
    pub metric_id: Option<MetricId>,
    /// Inclusive lower bound on `period_start`.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `period_start`.
    pub to: Option<DateTime<Utc>>,
}

/// Response of `GET /v1/usage`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsageQueryResult {
    /// Matching rollups.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub rollups: Vec<UsageRollup>,
    /// Number of rollups returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Portal tokens
// =============================================================================

/// Body for `POST /v1/portal/tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePortalTokenRequest {
    /// The `external_id` given when the customer was created.
    pub customer_external_id: String,
    /// Human-readable name for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// When the link stops working; omit for a permanent link.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_rfc3339"
    )]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreatePortalTokenRequest {
    /// A permanent, unlabelled link.
    #[must_use]
    pub fn new(customer_external_id: impl Into<String>) -> Self {
        Self {
            customer_external_id: customer_external_id.into(),
            label: None,
            expires_at: None,
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set an expiry.
    #[must_use]
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

fn serialize_optional_rfc3339<S: Serializer>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match timestamp {
        Some(timestamp) => serialize_rfc3339(timestamp, serializer),
        None => serializer.serialize_none(),
    }
}

/// Response of `GET /v1/portal/tokens`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListPortalTokensResponse {
    /// The customer's portal tokens.
    #[serde(default, deserialize_with = "monigo_core::nullable::vec")]
    pub tokens: Vec<PortalToken>,
    /// Number of tokens returned.
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// Events
// =============================================================================

/// Body for `POST /v1/ingest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestRequest {
    /// Events to ingest.
    pub events: Vec<IngestEvent>,
}

impl From<Vec<IngestEvent>> for IngestRequest {
    fn from(events: Vec<IngestEvent>) -> Self {
        Self { events }
    }
}

/// Body for `POST /v1/events/replay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartReplayRequest {
    /// Start of the window.
    #[serde(serialize_with = "serialize_rfc3339")]
    pub from: DateTime<Utc>,
    /// End of the window.
    #[serde(serialize_with = "serialize_rfc3339")]
    pub to: DateTime<Utc>,
    /// Only replay events with this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}
