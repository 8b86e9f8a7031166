//! User subscription entity.
//!
//! The subscription record itself is owned and persisted by the external
//! data layer; this core only computes its derived fields (period end, next
//! delivery date, cumulative total) and offers the pure roll-forward the
//! webhook receiver applies on a renewal notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;
use crate::ids::{PlanId, SubscriptionId};
use crate::schedule::next_delivery_date;
use crate::status::SubscriptionStatus;

/// A customer's club subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSubscription {
    /// The subscription ID.
    pub id: SubscriptionId,

    /// The subscribed plan.
    pub plan_id: PlanId,

    /// Selected billing frequency.
    pub frequency: Frequency,

    /// Current status.
    pub status: SubscriptionStatus,

    /// Start of the current billing period.
    pub current_period_start: DateTime<Utc>,

    /// End of the current billing period.
    pub current_period_end: DateTime<Utc>,

    /// When the next box ships.
    pub next_delivery_date: DateTime<Utc>,

    /// Cumulative amount paid, in centavos.
    pub total_paid_cents: i64,

    /// Recurring-billing provider subscription ID, once known.
    pub provider_subscription_id: Option<String>,

    /// When the subscription was created.
    pub created_at: DateTime<Utc>,
}

impl UserSubscription {
    /// Create a new pending subscription anchored at `now`.
    ///
    /// The subscription stays pending until the first successful payment
    /// arrives through the webhook receiver.
    #[must_use]
    pub fn new(
        id: SubscriptionId,
        plan_id: PlanId,
        frequency: Frequency,
        now: DateTime<Utc>,
    ) -> Self {
        let period_end = next_delivery_date(frequency, now);
        Self {
            id,
            plan_id,
            frequency,
            status: SubscriptionStatus::Pending,
            current_period_start: now,
            current_period_end: period_end,
            next_delivery_date: period_end,
            total_paid_cents: 0,
            provider_subscription_id: None,
            created_at: now,
        }
    }

    /// Check whether the subscription is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }

    /// Roll the billing period forward after a successful renewal payment.
    ///
    /// Applies the pure computation the webhook receiver performs on a
    /// renewal notification: accumulate the paid amount, activate, and move
    /// the period and delivery dates one cadence past `now`. Persisting the
    /// updated record remains the caller's job.
    pub fn advance_period(&mut self, paid_amount_cents: i64, now: DateTime<Utc>) {
        self.total_paid_cents += paid_amount_cents;
        self.status = SubscriptionStatus::Active;
        self.current_period_start = now;
        self.current_period_end = next_delivery_date(self.frequency, now);
        self.next_delivery_date = self.current_period_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
    }

    fn new_subscription(frequency: Frequency, now: DateTime<Utc>) -> UserSubscription {
        UserSubscription::new(
            SubscriptionId::generate(),
            PlanId::generate(),
            frequency,
            now,
        )
    }

    #[test]
    fn new_subscription_is_pending() {
        let sub = new_subscription(Frequency::Weekly, date(2024, 1, 1));
        assert_eq!(sub.status, SubscriptionStatus::Pending);
        assert!(!sub.is_active());
        assert_eq!(sub.total_paid_cents, 0);
        assert_eq!(sub.next_delivery_date, date(2024, 1, 8));
        assert_eq!(sub.current_period_end, sub.next_delivery_date);
    }

    #[test]
    fn advance_period_activates_and_rolls_dates() {
        let mut sub = new_subscription(Frequency::Monthly, date(2024, 1, 15));
        sub.advance_period(5_400_000, date(2024, 1, 15));

        assert!(sub.is_active());
        assert_eq!(sub.total_paid_cents, 5_400_000);
        assert_eq!(sub.current_period_start, date(2024, 1, 15));
        assert_eq!(sub.current_period_end, date(2024, 2, 15));
        assert_eq!(sub.next_delivery_date, date(2024, 2, 15));
    }

    #[test]
    fn advance_period_accumulates_total_paid() {
        let mut sub = new_subscription(Frequency::Biweekly, date(2024, 3, 1));
        sub.advance_period(2_800_000, date(2024, 3, 1));
        sub.advance_period(2_800_000, date(2024, 3, 15));

        assert_eq!(sub.total_paid_cents, 5_600_000);
        assert_eq!(sub.next_delivery_date, date(2024, 3, 29));
    }

    #[test]
    fn subscription_serde_roundtrip() {
        let sub = new_subscription(Frequency::Weekly, date(2024, 5, 1));
        let json = serde_json::to_string(&sub).unwrap();
        let parsed: UserSubscription = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, sub.id);
        assert_eq!(parsed.frequency, Frequency::Weekly);
        assert_eq!(parsed.next_delivery_date, sub.next_delivery_date);
    }
}
