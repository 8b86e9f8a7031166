//! Pricing resolver for subscription plans.
//!
//! Computes the amount to charge for a plan at a given frequency, and the
//! discount each cadence represents relative to the weekly baseline.

use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;
use crate::plan::SubscriptionPlan;

/// Get the price to charge for a plan at a frequency, in centavos.
///
/// An absent price resolves to zero. Plans may legitimately be partially
/// configured by the admin workflow, so zero is a valid (if degenerate)
/// result, never an error.
#[must_use]
pub fn price_for(plan: &SubscriptionPlan, frequency: Frequency) -> i64 {
    match frequency {
        Frequency::Weekly => plan.price_weekly_cents,
        Frequency::Biweekly => plan.price_biweekly_cents,
        Frequency::Monthly => plan.price_monthly_cents,
    }
    .unwrap_or(0)
}

/// Compute the discount a frequency represents vs. the weekly baseline,
/// rounded to the nearest whole percent.
///
/// The equivalent per-week price uses the fixed weeks-per-period
/// approximation from [`Frequency::weeks_per_period`]. Returns zero when the
/// weekly price or the resolved price is zero or absent. The result may be
/// negative when a longer cadence is priced worse per week than weekly; that
/// is a valid output that should surface a plan-configuration mistake, so it
/// is not clamped.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn discount_percent_for(plan: &SubscriptionPlan, frequency: Frequency) -> i64 {
    let weekly = plan.price_weekly_cents.unwrap_or(0);
    let price = price_for(plan, frequency);
    if weekly == 0 || price == 0 {
        return 0;
    }

    let equivalent_weekly = price as f64 / frequency.weeks_per_period() as f64;
    (100.0 * (weekly as f64 - equivalent_weekly) / weekly as f64).round() as i64
}

/// The full per-frequency price breakdown for a plan.
///
/// The biweekly and monthly discounts are computed; the quarterly discount is
/// taken verbatim from the admin-entered value on the plan. That asymmetry is
/// intentional: quarterly is a price tier authored in the admin workflow, not
/// a schedulable frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    /// Weekly price in centavos.
    pub weekly_cents: i64,

    /// Biweekly price in centavos.
    pub biweekly_cents: i64,

    /// Monthly price in centavos.
    pub monthly_cents: i64,

    /// Quarterly price in centavos.
    pub quarterly_cents: i64,

    /// Discount percentages vs. the weekly baseline.
    pub discounts: PlanDiscounts,
}

/// Discount percentages for the non-weekly tiers of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDiscounts {
    /// Computed biweekly discount percent.
    pub biweekly_percent: i64,

    /// Computed monthly discount percent.
    pub monthly_percent: i64,

    /// Authored quarterly discount percent.
    pub quarterly_percent: i64,
}

/// Build the full pricing table for a plan.
#[must_use]
pub fn pricing_table(plan: &SubscriptionPlan) -> PricingTable {
    PricingTable {
        weekly_cents: plan.price_weekly_cents.unwrap_or(0),
        biweekly_cents: plan.price_biweekly_cents.unwrap_or(0),
        monthly_cents: plan.price_monthly_cents.unwrap_or(0),
        quarterly_cents: plan.price_quarterly_cents.unwrap_or(0),
        discounts: PlanDiscounts {
            biweekly_percent: discount_percent_for(plan, Frequency::Biweekly),
            monthly_percent: discount_percent_for(plan, Frequency::Monthly),
            quarterly_percent: plan.quarterly_discount_percent.unwrap_or(0),
        },
    }
}
