//! Usage rollups: server-computed aggregates of ingested events.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Aggregation, CustomerId, MetricId, OrgId, RollupId};

/// Aggregated usage for one customer/metric/period tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRollup {
    /// Rollup ID.
    pub id: RollupId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// Customer whose usage is aggregated.
    pub customer_id: CustomerId,

    /// Metric being aggregated.
    pub metric_id: MetricId,

    /// Start of the aggregation period.
    pub period_start: DateTime<Utc>,

    /// End of the aggregation period.
    pub period_end: DateTime<Utc>,

    /// Aggregation that produced `value`.
    pub aggregation: Aggregation,

    /// Aggregated usage (count, sum, max, ...).
    pub value: Decimal,

    /// Number of events folded into this rollup.
    pub event_count: i64,

    /// Timestamp of the most recent event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_at: Option<DateTime<Utc>>,

    /// Whether the rollup was produced by a test-mode key.
    #[serde(default)]
    pub is_test: bool,

    /// When the rollup was created.
    pub created_at: DateTime<Utc>,

    /// When the rollup was last updated.
    pub updated_at: DateTime<Utc>,
}
