//! Recurring-billing provider API types.

use serde::{Deserialize, Serialize};

/// Preapproval (recurring charge authorization) creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreapprovalRequest {
    /// Human-readable reason shown on the customer's statement.
    pub reason: String,

    /// Our subscription ID, echoed back in provider notifications.
    pub external_reference: String,

    /// The recurrence rule and amount.
    pub auto_recurring: AutoRecurring,

    /// Where the provider redirects the customer after authorizing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_url: Option<String>,
}

impl PreapprovalRequest {
    /// Set the post-authorization redirect URL.
    #[must_use]
    pub fn with_back_url(mut self, url: impl Into<String>) -> Self {
        self.back_url = Some(url.into());
        self
    }
}

/// Recurrence rule for a preapproval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoRecurring {
    /// How many units between charges.
    pub frequency: u32,

    /// Calendar unit of the interval ("weeks" or "months").
    pub frequency_type: String,

    /// Amount charged each period, in centavos.
    pub transaction_amount_cents: i64,

    /// ISO currency code.
    pub currency_id: String,
}
