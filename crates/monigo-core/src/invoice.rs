//! Invoices and their line items.
//!
//! All monetary values are decimal strings on the wire (e.g. `"1500.00"`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CustomerId, InvoiceId, LineItemId, MetricId, OrgId, PriceId, SubscriptionId};

wire_enum! {
    /// Lifecycle status of an invoice.
    InvoiceStatus {
        /// Editable draft generated from current period usage.
        Draft => "draft",
        /// Locked and ready for payment.
        Finalized => "finalized",
        /// Payment received.
        Paid => "paid",
        /// No longer payable.
        Void => "void",
    }
}

/// One line on an invoice: usage of a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Line item ID.
    pub id: LineItemId,

    /// Invoice this line belongs to.
    pub invoice_id: InvoiceId,

    /// Metric being charged.
    pub metric_id: MetricId,

    /// Price applied, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_id: Option<PriceId>,

    /// Human-readable description.
    pub description: String,

    /// Quantity billed.
    pub quantity: Decimal,

    /// Unit price applied.
    pub unit_price: Decimal,

    /// Line total.
    pub amount: Decimal,

    /// When the line was created.
    pub created_at: DateTime<Utc>,
}

/// A billing invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// Billed customer.
    pub customer_id: CustomerId,

    /// Subscription the invoice was generated for.
    pub subscription_id: SubscriptionId,

    /// Lifecycle status.
    pub status: InvoiceStatus,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Total before VAT.
    pub subtotal: Decimal,

    /// Whether VAT applies.
    #[serde(default)]
    pub vat_enabled: bool,

    /// VAT rate, when VAT applies.
    #[serde(
        default,
        deserialize_with = "crate::money::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub vat_rate: Option<Decimal>,

    /// VAT amount, when VAT applies.
    #[serde(
        default,
        deserialize_with = "crate::money::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub vat_amount: Option<Decimal>,

    /// Amount due.
    pub total: Decimal,

    /// Start of the billed period.
    pub period_start: DateTime<Utc>,

    /// End of the billed period.
    pub period_end: DateTime<Utc>,

    /// When the invoice was finalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized_at: Option<DateTime<Utc>>,

    /// When the invoice was paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,

    /// Invoice ID at the payment provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_invoice_id: Option<String>,

    /// Line items (present on single-invoice reads).
    #[serde(default, deserialize_with = "crate::nullable::vec")]
    pub line_items: Vec<InvoiceLineItem>,

    /// When the invoice was created.
    pub created_at: DateTime<Utc>,

    /// When the invoice was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Whether the invoice can still be paid.
    #[must_use]
    pub fn is_payable(&self) -> bool {
        self.status == InvoiceStatus::Finalized
    }

    /// Sum of line item amounts.
    #[must_use]
    pub fn line_items_total(&self) -> Decimal {
        self.line_items.iter().map(|item| item.amount).sum()
    }
}
