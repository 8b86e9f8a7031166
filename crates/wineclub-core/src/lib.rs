//! Core domain types and calculators for the wine-club storefront.
//!
//! This crate is the deterministic heart of the club: pure, synchronous
//! functions with no I/O and no shared mutable state.
//!
//! - **Frequencies**: `Frequency`, `ScheduleDescriptor`, `ScheduleUnit`
//! - **Plans**: `SubscriptionPlan`
//! - **Pricing**: `price_for`, `discount_percent_for`, `pricing_table`
//! - **Scheduling**: `next_delivery_date`
//! - **Shipping**: `ZoneTable`, `ShippingZone`
//! - **Statuses**: `SubscriptionStatus`, `DeliveryStatus` and label formatters
//!
//! # Money
//!
//! All amounts are `i64` minor currency units (centavos) to avoid floating
//! point in money paths. A missing plan price resolves to 0, never an error:
//! the admin workflow may legitimately leave a tier unconfigured.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frequency;
pub mod ids;
pub mod plan;
pub mod pricing;
pub mod schedule;
pub mod shipping;
pub mod status;
pub mod subscription;

pub use error::{ClubError, Result};
pub use frequency::{Frequency, ScheduleDescriptor, ScheduleUnit};
pub use ids::{IdError, PlanId, SubscriptionId};
pub use plan::SubscriptionPlan;
pub use pricing::{discount_percent_for, price_for, pricing_table, PlanDiscounts, PricingTable};
pub use schedule::{next_delivery_date, next_delivery_date_from_now};
pub use shipping::{PostalRange, ShippingZone, ZoneTable};
pub use status::{
    delivery_status_label, frequency_label, subscription_status_label, DeliveryStatus,
    SubscriptionStatus,
};
pub use subscription::UserSubscription;
