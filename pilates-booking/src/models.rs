use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a stored booking. There is exactly one live state;
/// cancellation removes the record instead of transitioning it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
}

/// A booked session slot as persisted in the shared ledger key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredBooking {
    pub id: String,
    pub user_login: String,
    pub event_id: String,
    pub session_title: String,
    pub instructor: String,
    /// Session day, `YYYY-MM-DD`.
    pub date: String,
    /// Session start, `HH:MM`.
    pub time: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl StoredBooking {
    /// Key identifying the logical slot a member booked. Two records with
    /// the same slot key describe the same booking.
    pub fn slot_key(&self) -> String {
        slot_key(&self.user_login, &self.event_id, &self.date, &self.time)
    }

    /// Session start as a naive timestamp, `None` when the stored date or
    /// time does not parse.
    pub fn slot_start(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M").ok()?;
        Some(date.and_time(time))
    }
}

/// Booking request as submitted by the UI; the ledger fills in `id`,
/// `created_at` and `status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingPayload {
    pub user_login: String,
    pub event_id: String,
    pub session_title: String,
    pub instructor: String,
    pub date: String,
    pub time: String,
}

impl NewBookingPayload {
    pub fn slot_key(&self) -> String {
        slot_key(&self.user_login, &self.event_id, &self.date, &self.time)
    }
}

fn slot_key(user_login: &str, event_id: &str, date: &str, time: &str) -> String {
    format!("{}:{}:{}:{}", user_login, event_id, date, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(user_login: &str, date: &str, time: &str) -> StoredBooking {
        StoredBooking {
            id: "1770000000000-abc123".to_string(),
            user_login: user_login.to_string(),
            event_id: "e1".to_string(),
            session_title: "Pilates Core".to_string(),
            instructor: "Ana".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_slot_key_joins_owner_event_date_time() {
        let stored = booking("u1", "2026-02-10", "18:30");
        assert_eq!(stored.slot_key(), "u1:e1:2026-02-10:18:30");

        let payload = NewBookingPayload {
            user_login: "u1".to_string(),
            event_id: "e1".to_string(),
            session_title: "Pilates Core".to_string(),
            instructor: "Ana".to_string(),
            date: "2026-02-10".to_string(),
            time: "18:30".to_string(),
        };
        assert_eq!(payload.slot_key(), stored.slot_key());
    }

    #[test]
    fn test_slot_start_parses_date_and_time() {
        let stored = booking("u1", "2026-02-10", "18:30");
        let start = stored.slot_start().unwrap();
        assert_eq!(start.to_string(), "2026-02-10 18:30:00");

        assert!(booking("u1", "someday", "18:30").slot_start().is_none());
        assert!(booking("u1", "2026-02-10", "soon").slot_start().is_none());
    }

    #[test]
    fn test_status_serializes_screaming() {
        let encoded = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(encoded, "\"CONFIRMED\"");
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let encoded = serde_json::to_string(&booking("u1", "2026-02-10", "18:30")).unwrap();
        assert!(encoded.contains("\"userLogin\":\"u1\""));
        assert!(encoded.contains("\"sessionTitle\":\"Pilates Core\""));
        assert!(encoded.contains("\"createdAt\":"));
        assert!(encoded.contains("\"status\":\"CONFIRMED\""));
    }
}
