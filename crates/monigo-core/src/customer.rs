//! Customer records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CustomerId, OrgId};

/// An end-customer inside a Monigo organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Monigo customer ID.
    pub id: CustomerId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// The ID used for this customer in the caller's own system.
    pub external_id: String,

    /// Display name.
    pub name: String,

    /// Email address (empty when unset).
    #[serde(default)]
    pub email: String,

    /// Phone number in E.164 format, e.g. `+2348012345678` (empty when unset).
    #[serde(default)]
    pub phone: String,

    /// Arbitrary caller-defined data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,

    /// When the customer was last updated.
    pub updated_at: DateTime<Utc>,
}
