//! Billing metrics: the definitions of what gets counted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MetricId, OrgId};

wire_enum! {
    /// How ingested events are aggregated into a metric value.
    Aggregation {
        /// Number of matching events.
        Count => "count",
        /// Sum of the aggregation property.
        Sum => "sum",
        /// Maximum of the aggregation property.
        Max => "max",
        /// Minimum of the aggregation property.
        Minimum => "minimum",
        /// Mean of the aggregation property.
        Average => "average",
        /// Number of distinct values of the aggregation property.
        Unique => "unique",
    }
}

impl Aggregation {
    /// Whether this aggregation reads a property value from each event.
    #[must_use]
    pub const fn needs_property(self) -> bool {
        !matches!(self, Self::Count)
    }
}

/// A billing metric: which events are counted and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric ID.
    pub id: MetricId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// Human-readable label (e.g. "API Calls").
    pub name: String,

    /// The `event_name` value this metric tracks.
    pub event_name: String,

    /// Aggregation applied to matching events.
    pub aggregation: Aggregation,

    /// Event property read by sum/max/minimum/average/unique aggregations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_property: Option<String>,

    /// Optional documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the metric was created.
    pub created_at: DateTime<Utc>,

    /// When the metric was last updated.
    pub updated_at: DateTime<Utc>,
}
