//! Usage event ingestion and event replay.
//!
//! Events carry a caller-supplied [`IdempotencyKey`]; the server reports which
//! keys were newly ingested and which it recognised as duplicates. The client
//! never de-duplicates locally.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CustomerId, IdempotencyKey, OrgId, ReplayJobId};

/// A single usage event to ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestEvent {
    /// Event name (e.g. `"api_call"`, `"storage.write"`).
    pub event_name: String,

    /// Customer the event belongs to.
    pub customer_id: CustomerId,

    /// Unique key for this event; re-sending the same key is safe.
    pub idempotency_key: IdempotencyKey,

    /// When the event occurred. Backdated events are accepted within the
    /// server's replay window.
    pub timestamp: DateTime<Utc>,

    /// Dimensions attached to the event (endpoint, region, bytes, ...).
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl IngestEvent {
    /// Create an event occurring now with a freshly generated idempotency key.
    #[must_use]
    pub fn new(event_name: impl Into<String>, customer_id: CustomerId) -> Self {
        Self {
            event_name: event_name.into(),
            customer_id,
            idempotency_key: IdempotencyKey::generate(),
            timestamp: Utc::now(),
            properties: BTreeMap::new(),
        }
    }

    /// Set the idempotency key.
    #[must_use]
    pub fn with_idempotency_key(mut self, key: impl Into<IdempotencyKey>) -> Self {
        self.idempotency_key = key.into();
        self
    }

    /// Set the event timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Add a property.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Outcome of an ingest call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResponse {
    /// Keys of events that were newly ingested.
    #[serde(default, deserialize_with = "crate::nullable::vec")]
    pub ingested: Vec<IdempotencyKey>,

    /// Keys of events skipped because they were already ingested.
    #[serde(default, deserialize_with = "crate::nullable::vec")]
    pub duplicates: Vec<IdempotencyKey>,
}

impl IngestResponse {
    /// Check if the given key was recognised as a duplicate.
    #[must_use]
    pub fn is_duplicate(&self, key: &IdempotencyKey) -> bool {
        self.duplicates.contains(key)
    }
}

wire_enum! {
    /// Progress of an event replay job.
    ReplayStatus {
        /// Accepted, not yet started.
        Pending => "pending",
        /// Replaying events.
        Running => "running" | "processing",
        /// All events replayed.
        Completed => "completed",
        /// Stopped with an error; see `error_message`.
        Failed => "failed",
    }
}

impl ReplayStatus {
    /// Whether the job will make no further progress.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// An asynchronous replay of raw events through the current pipeline.
///
/// Callers poll for progress themselves; the client never polls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReplayJob {
    /// Job ID.
    pub id: ReplayJobId,

    /// Owning organisation.
    #[serde(default)]
    pub org_id: Option<OrgId>,

    /// Principal that started the replay.
    #[serde(default)]
    pub initiated_by: String,

    /// Current status.
    pub status: ReplayStatus,

    /// Start of the replayed window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_timestamp: Option<DateTime<Utc>>,

    /// End of the replayed window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_timestamp: Option<DateTime<Utc>>,

    /// Event name filter, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    /// Whether the job runs against test-mode data.
    #[serde(default)]
    pub is_test: bool,

    /// Events in the window.
    #[serde(default)]
    pub events_total: i64,

    /// Events replayed so far.
    #[serde(default)]
    pub events_replayed: i64,

    /// Failure reason for failed jobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// When processing started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When processing finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// When the job was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the job was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventReplayJob {
    /// Whether the job reached a terminal status.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Fraction of events replayed, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.events_total <= 0 {
            return if self.status == ReplayStatus::Completed { 1.0 } else { 0.0 };
        }
        (self.events_replayed as f64 / self.events_total as f64).clamp(0.0, 1.0)
    }
}
