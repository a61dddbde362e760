use chrono::Utc;
use rand::Rng;
use tracing::debug;

use pilates_store::codec;
use pilates_store::{ChangeNotifier, KeyValueStore, StoreError, Subscription};

use crate::models::{BookingStatus, NewBookingPayload, StoredBooking};

/// Storage key shared by every member's bookings.
pub const BOOKINGS_KEY: &str = "core_bookings";

/// All-member booking ledger persisted under a single storage key.
///
/// Clones share the store and the change broadcast, so every component
/// holding a handle sees the same ledger and hears the same notifications.
#[derive(Clone)]
pub struct BookingLedger<S: KeyValueStore> {
    store: S,
    notifier: ChangeNotifier,
}

impl<S: KeyValueStore> BookingLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Registers a callback invoked after every successful booking write or
    /// delete. No payload is delivered; subscribers re-read the ledger.
    pub fn on_change(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }

    /// Bookings owned by `user_login`. A missing or corrupt payload reads
    /// as an empty ledger; malformed records are dropped individually.
    pub fn list_bookings(&self, user_login: &str) -> Vec<StoredBooking> {
        self.read_all()
            .into_iter()
            .filter(|booking| booking.user_login == user_login)
            .collect()
    }

    /// Books a slot for the member named in `payload`.
    ///
    /// Booking an already-booked slot returns the existing record without
    /// writing or notifying, so retried UI calls cannot duplicate a
    /// booking. Storage write failures propagate.
    pub fn add_booking(&self, payload: NewBookingPayload) -> Result<StoredBooking, BookingError> {
        let mut bookings = self.read_all();
        let slot = payload.slot_key();

        if let Some(existing) = bookings.iter().find(|booking| booking.slot_key() == slot) {
            debug!("Slot {} already booked as {}", slot, existing.id);
            return Ok(existing.clone());
        }

        let booking = StoredBooking {
            id: generate_booking_id(),
            user_login: payload.user_login,
            event_id: payload.event_id,
            session_title: payload.session_title,
            instructor: payload.instructor,
            date: payload.date,
            time: payload.time,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        bookings.push(booking.clone());
        self.persist(&bookings)?;
        debug!("Booked slot {} as {}", slot, booking.id);
        Ok(booking)
    }

    /// Removes the booking matching both `booking_id` and `user_login`.
    ///
    /// A mismatched owner removes nothing; the caller cannot distinguish
    /// "not found" from "not yours". Either way the ledger is rewritten and
    /// subscribers are notified.
    pub fn remove_booking(&self, booking_id: &str, user_login: &str) -> Result<(), BookingError> {
        let remaining: Vec<StoredBooking> = self
            .read_all()
            .into_iter()
            .filter(|booking| !(booking.id == booking_id && booking.user_login == user_login))
            .collect();

        self.persist(&remaining)
    }

    fn read_all(&self) -> Vec<StoredBooking> {
        match self.store.get(BOOKINGS_KEY) {
            Some(raw) => codec::decode_array(&raw, "booking ledger"),
            None => Vec::new(),
        }
    }

    fn persist(&self, bookings: &[StoredBooking]) -> Result<(), BookingError> {
        let encoded = serde_json::to_string(bookings)?;
        self.store.set(BOOKINGS_KEY, &encoded)?;
        self.notifier.notify();
        Ok(())
    }
}

/// Opaque booking id: creation time in milliseconds plus a short random
/// suffix. Uniqueness is best effort.
fn generate_booking_id() -> String {
    let suffix = rand::thread_rng().gen::<u32>() & 0xff_ffff;
    format!("{}-{:06x}", Utc::now().timestamp_millis(), suffix)
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to encode booking ledger: {0}")]
    Encode(#[from] serde_json::Error),
}
