use chrono::NaiveDateTime;

use crate::models::StoredBooking;

/// A member's bookings split around a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedBookings {
    /// Sessions starting at or after the split point, soonest first.
    pub upcoming: Vec<StoredBooking>,
    /// Sessions that already started, oldest first. Slots that do not parse
    /// end up here.
    pub previous: Vec<StoredBooking>,
}

/// Sorts `bookings` by session start and splits them around `now`.
pub fn partition_bookings(
    mut bookings: Vec<StoredBooking>,
    now: NaiveDateTime,
) -> PartitionedBookings {
    // Unparseable slots sort last
    bookings.sort_by_key(|booking| match booking.slot_start() {
        Some(start) => (false, Some(start)),
        None => (true, None),
    });

    let mut upcoming = Vec::new();
    let mut previous = Vec::new();
    for booking in bookings {
        match booking.slot_start() {
            Some(start) if start >= now => upcoming.push(booking),
            _ => previous.push(booking),
        }
    }

    PartitionedBookings { upcoming, previous }
}
