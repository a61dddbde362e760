use chrono::{Duration, NaiveDateTime};
use pilates_store::BusinessRules;

use crate::models::StoredBooking;

/// Outcome of checking a cancellation request against the cutoff window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationRuling {
    /// The session is far enough away to cancel free of charge.
    Allowed,
    /// The session starts within the cutoff window, or has already started;
    /// cancelling now is charged against the member's plan.
    TooLate { hours_until_start: i64 },
}

/// Free-cancellation window checked before removing a booking.
///
/// Advisory only: the ledger itself never consults it, callers decide what
/// to do with the ruling.
#[derive(Debug, Clone, Copy)]
pub struct CancellationPolicy {
    cutoff_hours: i64,
}

impl CancellationPolicy {
    pub fn new(cutoff_hours: i64) -> Self {
        Self { cutoff_hours }
    }

    pub fn from_rules(rules: &BusinessRules) -> Self {
        Self::new(rules.cancellation_cutoff_hours)
    }

    /// Rules on cancelling `booking` at `now`. A slot whose date or time
    /// does not parse is ruled `Allowed`.
    pub fn assess(&self, booking: &StoredBooking, now: NaiveDateTime) -> CancellationRuling {
        let Some(start) = booking.slot_start() else {
            return CancellationRuling::Allowed;
        };

        let until_start = start.signed_duration_since(now);
        if until_start < Duration::hours(self.cutoff_hours) {
            CancellationRuling::TooLate {
                hours_until_start: until_start.num_hours(),
            }
        } else {
            CancellationRuling::Allowed
        }
    }
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self::from_rules(&BusinessRules::default())
    }
}
