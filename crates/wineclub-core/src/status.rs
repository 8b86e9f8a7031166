//! Status enumerations and display-label formatters.
//!
//! Pure lookup tables from internal status codes to storefront labels. The
//! raw-code formatters never fail: an unrecognized code is echoed back
//! unchanged so a stale or future code degrades to showing itself.

use serde::{Deserialize, Serialize};

/// Status of a user subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription is active and billing.
    Active,

    /// Deliveries are paused at the customer's request.
    Paused,

    /// Subscription was cancelled.
    Cancelled,

    /// Awaiting the first successful payment.
    Pending,

    /// The last renewal payment failed.
    Failed,
}

impl SubscriptionStatus {
    /// Get the status code as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Cancelled => "cancelled",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }

    /// Get the user-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Activa",
            Self::Paused => "Pausada",
            Self::Cancelled => "Cancelada",
            Self::Pending => "Pendiente",
            Self::Failed => "Pago fallido",
        }
    }

    /// Get the display color token for status badges.
    #[must_use]
    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Active => "green",
            Self::Paused => "yellow",
            Self::Cancelled => "gray",
            Self::Pending => "blue",
            Self::Failed => "red",
        }
    }
}

/// Status of a single club delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Delivery is scheduled but not yet assembled.
    Pending,

    /// The box is being prepared.
    Preparing,

    /// Handed to the courier.
    Shipped,

    /// Delivered to the customer.
    Delivered,

    /// Delivery was cancelled.
    Cancelled,
}

impl DeliveryStatus {
    /// Get the status code as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Get the user-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Preparing => "En preparación",
            Self::Shipped => "En camino",
            Self::Delivered => "Entregado",
            Self::Cancelled => "Cancelado",
        }
    }
}

/// Format a raw subscription-status code for display.
///
/// Unknown codes are returned unchanged.
#[must_use]
pub fn subscription_status_label(code: &str) -> &str {
    match code {
        "active" => SubscriptionStatus::Active.label(),
        "paused" => SubscriptionStatus::Paused.label(),
        "cancelled" => SubscriptionStatus::Cancelled.label(),
        "pending" => SubscriptionStatus::Pending.label(),
        "failed" => SubscriptionStatus::Failed.label(),
        other => other,
    }
}

/// Format a raw delivery-status code for display.
///
/// Unknown codes are returned unchanged.
#[must_use]
pub fn delivery_status_label(code: &str) -> &str {
    match code {
        "pending" => DeliveryStatus::Pending.label(),
        "preparing" => DeliveryStatus::Preparing.label(),
        "shipped" => DeliveryStatus::Shipped.label(),
        "delivered" => DeliveryStatus::Delivered.label(),
        "cancelled" => DeliveryStatus::Cancelled.label(),
        other => other,
    }
}

/// Format a raw frequency code for display.
///
/// Unknown codes are returned unchanged.
#[must_use]
pub fn frequency_label(code: &str) -> &str {
    match code {
        "weekly" => "Semanal",
        "biweekly" => "Quincenal",
        "monthly" => "Mensual",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_status_labels_cover_all_members() {
        let all = [
            SubscriptionStatus::Active,
            SubscriptionStatus::Paused,
            SubscriptionStatus::Cancelled,
            SubscriptionStatus::Pending,
            SubscriptionStatus::Failed,
        ];
        for status in all {
            assert!(!status.label().is_empty());
            assert_ne!(status.label(), status.as_str());
            assert_eq!(subscription_status_label(status.as_str()), status.label());
        }
    }

    #[test]
    fn delivery_status_labels_cover_all_members() {
        let all = [
            DeliveryStatus::Pending,
            DeliveryStatus::Preparing,
            DeliveryStatus::Shipped,
            DeliveryStatus::Delivered,
            DeliveryStatus::Cancelled,
        ];
        for status in all {
            assert!(!status.label().is_empty());
            assert_eq!(delivery_status_label(status.as_str()), status.label());
        }
    }

    #[test]
    fn unknown_codes_echo_back() {
        assert_eq!(subscription_status_label("archived"), "archived");
        assert_eq!(delivery_status_label("lost"), "lost");
        assert_eq!(frequency_label("quarterly"), "quarterly");
    }

    #[test]
    fn status_serde_snake_case() {
        let json = serde_json::to_string(&SubscriptionStatus::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
        let parsed: DeliveryStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(parsed, DeliveryStatus::Shipped);
    }

    #[test]
    fn color_tokens() {
        assert_eq!(SubscriptionStatus::Active.color_token(), "green");
        assert_eq!(SubscriptionStatus::Failed.color_token(), "red");
    }
}
