//! Subscriptions link customers to billing plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CustomerId, OrgId, PlanId, SubscriptionId};

wire_enum! {
    /// Status of a subscription.
    SubscriptionStatus {
        /// Subscription is billing normally.
        Active => "active",
        /// Billing is suspended until resumed.
        Paused => "paused",
        /// Subscription has been cancelled.
        Canceled => "canceled",
    }
}

/// A customer's subscription to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: SubscriptionId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// Subscribed customer.
    pub customer_id: CustomerId,

    /// Plan the customer is subscribed to.
    pub plan_id: PlanId,

    /// Current status.
    pub status: SubscriptionStatus,

    /// Start of the current billing period.
    pub current_period_start: DateTime<Utc>,

    /// End of the current billing period.
    pub current_period_end: DateTime<Utc>,

    /// End of the trial, if the plan has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<DateTime<Utc>>,

    /// When the subscription was created.
    pub created_at: DateTime<Utc>,

    /// When the subscription was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// Check if the subscription is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }

    /// Check if the subscription is still within its trial at `now`.
    #[must_use]
    pub fn in_trial(&self, now: DateTime<Utc>) -> bool {
        self.trial_ends_at.is_some_and(|ends| now < ends)
    }
}
