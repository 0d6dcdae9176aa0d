//! Customer portal tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CustomerId, OrgId, PortalTokenId};

/// A shareable link granting a customer read-only access to their invoices,
/// payout slips, subscriptions and payout accounts in the hosted portal.
///
/// Validity is decided by the server on every portal request; revocation takes
/// effect immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalToken {
    /// Token record ID (used to revoke).
    pub id: PortalTokenId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// Customer the portal belongs to.
    pub customer_id: CustomerId,

    /// Opaque token embedded in the portal URL.
    pub token: String,

    /// Human-readable label.
    #[serde(default)]
    pub label: String,

    /// Expiry, if the link is not permanent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// When the token was revoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<DateTime<Utc>>,

    /// When the token was created.
    pub created_at: DateTime<Utc>,

    /// When the token was last updated.
    pub updated_at: DateTime<Utc>,

    /// Fully-qualified URL to share with the customer.
    pub portal_url: String,
}

impl PortalToken {
    /// Whether the token record carries a revocation timestamp.
    #[must_use]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}
