pub mod ledger;
pub mod models;
pub mod policy;
pub mod schedule;

pub use ledger::{BookingError, BookingLedger, BOOKINGS_KEY};
pub use models::{BookingStatus, NewBookingPayload, StoredBooking};
pub use policy::{CancellationPolicy, CancellationRuling};
pub use schedule::{partition_bookings, PartitionedBookings};
