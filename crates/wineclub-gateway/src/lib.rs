//! Recurring-billing provider payload types for the wine club.
//!
//! The subscription-creation workflow forwards a plan's resolved price and
//! the frequency catalog's schedule descriptor to the provider's
//! recurring-billing API. This crate holds the serde payload types and the
//! pure translation from domain values into them; the HTTP client and the
//! provider's own protocol live outside this workspace.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;

pub use types::{AutoRecurring, PreapprovalRequest};

use wineclub_core::{price_for, Frequency, SubscriptionPlan};

/// Currency the storefront operates in.
pub const CURRENCY_ID: &str = "ARS";

/// Build the preapproval request for a plan at the selected frequency.
///
/// Pure translation: the amount comes from the pricing resolver (an
/// unconfigured tier resolves to 0, which the provider rejects upstream) and
/// the recurrence rule from the frequency's schedule descriptor.
#[must_use]
pub fn preapproval_request(
    plan: &SubscriptionPlan,
    frequency: Frequency,
    external_reference: impl Into<String>,
) -> PreapprovalRequest {
    let descriptor = frequency.schedule_descriptor();
    let amount_cents = price_for(plan, frequency);

    tracing::debug!(
        plan = %plan.name,
        frequency = frequency.as_str(),
        count = descriptor.count,
        unit = descriptor.unit.as_str(),
        amount_cents,
        "building preapproval request"
    );

    PreapprovalRequest {
        reason: format!("Club de vinos {} ({})", plan.name, frequency.label()),
        external_reference: external_reference.into(),
        auto_recurring: AutoRecurring {
            frequency: descriptor.count,
            frequency_type: descriptor.unit.as_str().to_string(),
            transaction_amount_cents: amount_cents,
            currency_id: CURRENCY_ID.to_string(),
        },
        back_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wineclub_core::PlanId;

    #[test]
    fn descriptor_maps_onto_recurrence_rule() {
        let plan = SubscriptionPlan::new(PlanId::generate(), "Club Malbec")
            .with_biweekly_price(2_800_000);
        let request = preapproval_request(&plan, Frequency::Biweekly, "sub_1");

        assert_eq!(request.auto_recurring.frequency, 2);
        assert_eq!(request.auto_recurring.frequency_type, "weeks");
        assert_eq!(request.auto_recurring.transaction_amount_cents, 2_800_000);
        assert_eq!(request.auto_recurring.currency_id, "ARS");
        assert_eq!(request.external_reference, "sub_1");
    }

    #[test]
    fn unconfigured_tier_builds_zero_amount() {
        let plan = SubscriptionPlan::new(PlanId::generate(), "Club Parcial");
        let request = preapproval_request(&plan, Frequency::Monthly, "sub_2");
        assert_eq!(request.auto_recurring.transaction_amount_cents, 0);
        assert_eq!(request.auto_recurring.frequency_type, "months");
    }
}
