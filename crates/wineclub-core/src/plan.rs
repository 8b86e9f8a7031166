//! Subscription plan types.
//!
//! Plans are authored by the admin workflow and consumed read-only by the
//! pricing resolver. A plan may be partially configured: any per-frequency
//! price can be absent, and absent prices resolve to zero rather than an
//! error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PlanId;

/// A purchasable wine-club tier.
///
/// Prices are in minor currency units (centavos) to avoid floating point in
/// money paths. Each per-frequency price is either a non-negative amount or
/// absent; a plan with every price absent is degenerate but valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    /// The plan ID.
    pub id: PlanId,

    /// Display name (e.g. "Club Malbec").
    pub name: String,

    /// Price per weekly delivery, in centavos.
    pub price_weekly_cents: Option<i64>,

    /// Price per biweekly delivery, in centavos.
    pub price_biweekly_cents: Option<i64>,

    /// Price per monthly delivery, in centavos.
    pub price_monthly_cents: Option<i64>,

    /// Price for the quarterly tier, in centavos.
    ///
    /// Quarterly is a display/price tier only, not a selectable billing
    /// frequency.
    pub price_quarterly_cents: Option<i64>,

    /// Admin-entered discount percentage for the quarterly tier.
    ///
    /// Unlike the biweekly/monthly discounts, this value is authored rather
    /// than computed.
    pub quarterly_discount_percent: Option<i64>,

    /// Number of wine bottles included per delivery.
    pub bottles_per_delivery: u32,

    /// Whether the plan can currently be subscribed to.
    pub is_active: bool,

    /// Whether the plan is shown in the storefront.
    pub is_visible: bool,

    /// When the plan was created.
    pub created_at: DateTime<Utc>,

    /// When the plan was last updated.
    pub updated_at: DateTime<Utc>,
}

impl SubscriptionPlan {
    /// Create a new plan with no prices configured.
    #[must_use]
    pub fn new(id: PlanId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            price_weekly_cents: None,
            price_biweekly_cents: None,
            price_monthly_cents: None,
            price_quarterly_cents: None,
            quarterly_discount_percent: None,
            bottles_per_delivery: 0,
            is_active: true,
            is_visible: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the weekly price in centavos.
    #[must_use]
    pub const fn with_weekly_price(mut self, cents: i64) -> Self {
        self.price_weekly_cents = Some(cents);
        self
    }

    /// Set the biweekly price in centavos.
    #[must_use]
    pub const fn with_biweekly_price(mut self, cents: i64) -> Self {
        self.price_biweekly_cents = Some(cents);
        self
    }

    /// Set the monthly price in centavos.
    #[must_use]
    pub const fn with_monthly_price(mut self, cents: i64) -> Self {
        self.price_monthly_cents = Some(cents);
        self
    }

    /// Set the quarterly price in centavos.
    #[must_use]
    pub const fn with_quarterly_price(mut self, cents: i64) -> Self {
        self.price_quarterly_cents = Some(cents);
        self
    }

    /// Set the authored quarterly discount percentage.
    #[must_use]
    pub const fn with_quarterly_discount(mut self, percent: i64) -> Self {
        self.quarterly_discount_percent = Some(percent);
        self
    }

    /// Set the number of bottles per delivery.
    #[must_use]
    pub const fn with_bottles(mut self, bottles: u32) -> Self {
        self.bottles_per_delivery = bottles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_plan_has_no_prices() {
        let plan = SubscriptionPlan::new(PlanId::generate(), "Club Malbec");
        assert!(plan.price_weekly_cents.is_none());
        assert!(plan.price_quarterly_cents.is_none());
        assert!(plan.is_active);
        assert!(plan.is_visible);
    }

    #[test]
    fn builder_sets_prices() {
        let plan = SubscriptionPlan::new(PlanId::generate(), "Club Malbec")
            .with_weekly_price(1_500_000)
            .with_monthly_price(5_400_000)
            .with_bottles(3);

        assert_eq!(plan.price_weekly_cents, Some(1_500_000));
        assert_eq!(plan.price_monthly_cents, Some(5_400_000));
        assert!(plan.price_biweekly_cents.is_none());
        assert_eq!(plan.bottles_per_delivery, 3);
    }

    #[test]
    fn plan_serde_roundtrip() {
        let plan = SubscriptionPlan::new(PlanId::generate(), "Club Reserva")
            .with_weekly_price(2_000_000)
            .with_quarterly_discount(15);

        let json = serde_json::to_string(&plan).unwrap();
        let parsed: SubscriptionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Club Reserva");
        assert_eq!(parsed.price_weekly_cents, Some(2_000_000));
        assert_eq!(parsed.quarterly_discount_percent, Some(15));
    }
}
