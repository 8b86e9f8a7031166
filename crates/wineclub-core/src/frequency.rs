//! Billing frequency catalog.
//!
//! This module is the source of truth for the supported billing cadences:
//! display label, calendar-advance rule, and the recurrence descriptor
//! forwarded to the external recurring-billing provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClubError;

/// A billing/delivery cadence a subscriber can select.
///
/// This is a closed set. The plan data model also carries a quarterly price
/// tier, but quarterly is not a selectable billing frequency; see
/// [`crate::pricing::pricing_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Billed and delivered every week.
    Weekly,

    /// Billed and delivered every two weeks.
    Biweekly,

    /// Billed and delivered once a calendar month.
    Monthly,
}

impl Frequency {
    /// All supported frequencies, in display order.
    pub const ALL: [Self; 3] = [Self::Weekly, Self::Biweekly, Self::Monthly];

    /// Get the frequency code as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    /// Get the user-facing label for this frequency.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Semanal",
            Self::Biweekly => "Quincenal",
            Self::Monthly => "Mensual",
        }
    }

    /// Get the recurrence descriptor forwarded to the recurring-billing
    /// provider.
    #[must_use]
    pub const fn schedule_descriptor(self) -> ScheduleDescriptor {
        match self {
            Self::Weekly => ScheduleDescriptor {
                count: 1,
                unit: ScheduleUnit::Weeks,
            },
            Self::Biweekly => ScheduleDescriptor {
                count: 2,
                unit: ScheduleUnit::Weeks,
            },
            Self::Monthly => ScheduleDescriptor {
                count: 1,
                unit: ScheduleUnit::Months,
            },
        }
    }

    /// Number of weeks one billing unit of this frequency represents.
    ///
    /// A fixed approximation (monthly counts as 4 weeks), used only to derive
    /// the equivalent per-week price for discount percentages. Not
    /// calendar-exact on purpose.
    #[must_use]
    pub const fn weeks_per_period(self) -> i64 {
        match self {
            Self::Weekly => 1,
            Self::Biweekly => 2,
            Self::Monthly => 4,
        }
    }
}

impl FromStr for Frequency {
    type Err = ClubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(ClubError::UnsupportedFrequency {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurrence interval for the external recurring-billing integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDescriptor {
    /// How many units between charges.
    pub count: u32,

    /// The calendar unit.
    pub unit: ScheduleUnit,
}

/// Calendar unit of a [`ScheduleDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleUnit {
    /// Interval measured in weeks.
    Weeks,

    /// Interval measured in calendar months.
    Months,
}

impl ScheduleUnit {
    /// Get the unit as the string the provider API expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }
}
