//! Payout accounts: where customers get paid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CustomerId, OrgId, PayoutAccountId};

wire_enum! {
    /// How a payout is delivered.
    PayoutMethod {
        /// Bank transfer to `account_number` at `bank_code`.
        BankTransfer => "bank_transfer",
        /// Mobile money transfer to `mobile_money_number`.
        MobileMoney => "mobile_money",
    }
}

/// A bank or mobile-money account a customer can be paid to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutAccount {
    /// Payout account ID.
    pub id: PayoutAccountId,

    /// Owning customer.
    pub customer_id: CustomerId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// Name on the account.
    pub account_name: String,

    /// Bank name (bank transfers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Bank code (bank transfers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    /// Account number (bank transfers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Mobile money number (mobile money).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_money_number: Option<String>,

    /// Delivery method.
    pub payout_method: PayoutMethod,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Whether this is the customer's default payout account.
    #[serde(default)]
    pub is_default: bool,

    /// Arbitrary caller-defined data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
