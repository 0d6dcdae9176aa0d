//! Billing plans, prices and pricing model configurations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{MetricId, OrgId, PlanId, PriceId};

wire_enum! {
    /// Pricing model of a single price.
    ///
    /// `FlatUnit` and `PerUnit` are distinct wire values that both charge a fixed
    /// `unit_price` per unit. The legacy spelling `"flat"` is accepted as `FlatUnit`.
    PricingModel {
        /// Fixed price per unit regardless of volume.
        FlatUnit => "flat_unit" | "flat",
        /// Fixed price per unit (separate wire value).
        PerUnit => "per_unit",
        /// Graduated tiers; configured with a list of [`PriceTier`].
        Tiered => "tiered",
        /// Price per bundle of N units; configured with [`PackageConfig`].
        Package => "package",
        /// Included quota then per-unit overage; configured with [`OverageConfig`].
        Overage => "overage",
    }
}

impl PricingModel {
    /// Whether the model is configured through `unit_price` rather than `tiers`.
    #[must_use]
    pub const fn uses_unit_price(self) -> bool {
        matches!(self, Self::FlatUnit | Self::PerUnit)
    }
}

wire_enum! {
    /// Direction of money flow for a plan.
    PlanType {
        /// Billing customers.
        Collection => "collection",
        /// Paying out to vendors.
        Payout => "payout",
    }
}

wire_enum! {
    /// Invoice cadence of a plan.
    BillingPeriod {
        /// Every day.
        Daily => "daily",
        /// Every week.
        Weekly => "weekly",
        /// Every calendar month.
        Monthly => "monthly",
        /// Every quarter.
        Quarterly => "quarterly",
        /// Every year.
        Annually => "annually",
    }
}

/// One step of a [`PricingModel::Tiered`] price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Inclusive upper bound of the tier; `None` means the tier is unbounded.
    pub up_to: Option<i64>,

    /// Price per unit within this tier.
    pub unit_amount: Decimal,
}

/// Configuration of a [`PricingModel::Package`] price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Units per bundle.
    pub package_size: i64,

    /// Price per complete bundle.
    pub package_price: Decimal,

    /// Round partial bundles up (`true`) or truncate them (`false`).
    #[serde(default = "default_round_up")]
    pub round_up_partial_block: bool,
}

const fn default_round_up() -> bool {
    true
}

/// Configuration of a [`PricingModel::Overage`] price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverageConfig {
    /// Free quota covered by `base_price`; 0 for pure per-unit overage.
    pub included_units: i64,

    /// Flat fee for usage up to `included_units`.
    pub base_price: Decimal,

    /// Per-unit rate above `included_units`.
    pub overage_price: Decimal,
}

/// A pricing rule attached to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Price ID.
    pub id: PriceId,

    /// Plan this price belongs to.
    pub plan_id: PlanId,

    /// Metric this price is based on.
    pub metric_id: MetricId,

    /// Pricing model.
    pub model: PricingModel,

    /// Price per unit for the flat models.
    #[serde(
        default,
        deserialize_with = "crate::money::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_price: Option<Decimal>,

    /// Model-specific configuration, see [`Price::tiers_as`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<serde_json::Value>,

    /// When the price was created.
    pub created_at: DateTime<Utc>,

    /// When the price was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Price {
    /// Decode the model-specific `tiers` configuration.
    ///
    /// Use `Vec<PriceTier>` for tiered prices, [`PackageConfig`] for package
    /// prices and [`OverageConfig`] for overage prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not match `T`.
    pub fn tiers_as<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.tiers
            .as_ref()
            .filter(|value| !value.is_null())
            .map(|value| T::deserialize(value))
            .transpose()
    }
}

/// A billing plan that prices one or more metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub id: PlanId,

    /// Owning organisation.
    pub org_id: OrgId,

    /// Display name.
    pub name: String,

    /// Optional documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Collection or payout plan.
    pub plan_type: PlanType,

    /// Invoice cadence.
    pub billing_period: BillingPeriod,

    /// Trial length in days (0 when there is no trial).
    #[serde(default)]
    pub trial_period_days: i32,

    /// Attached prices.
    #[serde(default, deserialize_with = "crate::nullable::vec")]
    pub prices: Vec<Price>,

    /// When the plan was created.
    pub created_at: DateTime<Utc>,

    /// When the plan was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price_json(model: &str, unit_price: &str, tiers: &str) -> String {
        format!(
            r#"{{
                "id": "price-1",
                "plan_id": "plan-1",
                "metric_id": "met-1",
                "model": "{model}",
                "unit_price": "{unit_price}",
                "tiers": {tiers},
                "created_at": "2026-03-01T10:00:00Z",
                "updated_at": "2026-03-01T10:00:00Z"
            }}"#
        )
    }

    #[test]
    fn legacy_flat_spelling_maps_to_flat_unit() {
        let price: Price = serde_json::from_str(&price_json("flat", "2.500000", "null")).unwrap();
        assert_eq!(price.model, PricingModel::FlatUnit);
        assert_eq!(price.unit_price, Some(Decimal::from_str("2.5").unwrap()));
        assert_eq!(PricingModel::FlatUnit.as_str(), "flat_unit");
        assert_ne!(PricingModel::FlatUnit, PricingModel::PerUnit);
    }

    #[test]
    fn tiered_price_decodes_tiers() {
        let tiers = r#"[{"up_to": 1000, "unit_amount": "0.50"}, {"up_to": null, "unit_amount": "0.25"}]"#;
        let price: Price = serde_json::from_str(&price_json("tiered", "", tiers)).unwrap();

        assert!(price.unit_price.is_none());
        let tiers: Vec<PriceTier> = price.tiers_as().unwrap().unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].up_to, Some(1000));
        assert_eq!(tiers[1].up_to, None);
        assert_eq!(tiers[1].unit_amount.to_string(), "0.25");
    }

    #[test]
    fn package_config_defaults_to_round_up() {
        let tiers = r#"{"package_size": 100, "package_price": "5.000000"}"#;
        let price: Price = serde_json::from_str(&price_json("package", "", tiers)).unwrap();
        let config: PackageConfig = price.tiers_as().unwrap().unwrap();
        assert_eq!(config.package_size, 100);
        assert!(config.round_up_partial_block);
    }

    #[test]
    fn mismatched_tiers_shape_is_an_error() {
        let tiers = r#"{"package_size": 100, "package_price": "5.000000"}"#;
        let price: Price = serde_json::from_str(&price_json("package", "", tiers)).unwrap();
        assert!(price.tiers_as::<OverageConfig>().is_err());
    }

    #[test]
    fn unbounded_tier_serializes_null() {
        let tier = PriceTier {
            up_to: None,
            unit_amount: Decimal::from_str("1.00").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&tier).unwrap(),
            serde_json::json!({"up_to": null, "unit_amount": "1.00"})
        );
    }

    #[test]
    fn only_flat_models_use_unit_price() {
        assert!(PricingModel::PerUnit.uses_unit_price());
        assert!(!PricingModel::Overage.uses_unit_price());
    }
}
