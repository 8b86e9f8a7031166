//! Delivery scheduling.
//!
//! Computes the next delivery/renewal date for a frequency from an explicit
//! anchor date. The anchor is a required parameter so the computation stays
//! deterministic; [`next_delivery_date_from_now`] is the convenience wrapper
//! that reads the wall clock.

use chrono::{DateTime, Days, Months, Utc};

use crate::frequency::Frequency;

/// Compute the next delivery/renewal date from an anchor date.
///
/// Weekly advances 7 calendar days, biweekly 14. Monthly uses calendar-aware
/// month addition: a month-end anchor clamps to the last day of the target
/// month (2024-01-31 advances to 2024-02-29). Saturates at the far end of the
/// representable date range instead of panicking.
#[must_use]
pub fn next_delivery_date(frequency: Frequency, from: DateTime<Utc>) -> DateTime<Utc> {
    match frequency {
        Frequency::Weekly => from.checked_add_days(Days::new(7)),
        Frequency::Biweekly => from.checked_add_days(Days::new(14)),
        Frequency::Monthly => from.checked_add_months(Months::new(1)),
    }
    .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Compute the next delivery date anchored at the current wall-clock time.
///
/// Callers needing determinism (tests, webhook replays) should use
/// [`next_delivery_date`] with an explicit anchor instead.
#[must_use]
pub fn next_delivery_date_from_now(frequency: Frequency) -> DateTime<Utc> {
    next_delivery_date(frequency, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn weekly_advances_seven_days() {
        assert_eq!(
            next_delivery_date(Frequency::Weekly, date(2024, 1, 1)),
            date(2024, 1, 8)
        );
    }

    #[test]
    fn biweekly_advances_fourteen_days() {
        assert_eq!(
            next_delivery_date(Frequency::Biweekly, date(2024, 1, 1)),
            date(2024, 1, 15)
        );
    }

    #[test]
    fn monthly_advances_one_calendar_month() {
        assert_eq!(
            next_delivery_date(Frequency::Monthly, date(2024, 1, 15)),
            date(2024, 2, 15)
        );
    }

    #[test]
    fn monthly_month_end_clamps_to_target_month_end() {
        // Regression pin for the month-end edge case: chrono's month-add
        // clamps Jan 31 to the last day of February.
        assert_eq!(
            next_delivery_date(Frequency::Monthly, date(2024, 1, 31)),
            date(2024, 2, 29)
        );
        assert_eq!(
            next_delivery_date(Frequency::Monthly, date(2023, 1, 31)),
            date(2023, 2, 28)
        );
    }

    #[test]
    fn monthly_crosses_year_boundary() {
        assert_eq!(
            next_delivery_date(Frequency::Monthly, date(2024, 12, 10)),
            date(2025, 1, 10)
        );
    }

    #[test]
    fn weekly_crosses_month_boundary() {
        assert_eq!(
            next_delivery_date(Frequency::Weekly, date(2024, 2, 26)),
            date(2024, 3, 4)
        );
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let anchor = date(2024, 6, 3);
        for frequency in Frequency::ALL {
            assert_eq!(
                next_delivery_date(frequency, anchor),
                next_delivery_date(frequency, anchor)
            );
        }
    }

    #[test]
    fn from_now_is_in_the_future() {
        let before = Utc::now();
        for frequency in Frequency::ALL {
            assert!(next_delivery_date_from_now(frequency) > before);
        }
    }
}
