//! Calendar event model representing a scheduled session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event fetched from the practice calendar.
///
/// Events are the raw input to reconciliation: each one carries the free-form
/// title typed by the therapist, the scheduled times, and the status flags
/// that decide whether the session is billable.
///
/// # Examples
///
/// ```
/// use practice_engine::models::CalendarEvent;
/// use chrono::{TimeZone, Utc};
///
/// let event = CalendarEvent {
///     id: "evt-001".to_string(),
///     title: "Μαρία Παπαδάκη 10:00".to_string(),
///     start_time: Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap(),
///     end_time: Utc.with_ymd_and_hms(2025, 3, 4, 11, 0, 0).unwrap(),
///     color_id: None,
///     is_cancelled: false,
///     is_pending_payment: false,
///     attendees: vec![],
/// };
///
/// assert!(event.counts_for_billing());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Calendar-assigned event identifier
    pub id: String,

    /// Free-form event title as typed by the therapist
    pub title: String,

    /// Scheduled start of the session
    pub start_time: DateTime<Utc>,

    /// Scheduled end of the session
    pub end_time: DateTime<Utc>,

    /// Calendar colour code, when one was set
    #[serde(default)]
    pub color_id: Option<String>,

    /// Whether the session was cancelled
    #[serde(default)]
    pub is_cancelled: bool,

    /// Whether a cancelled session must still be paid for
    #[serde(default)]
    pub is_pending_payment: bool,

    /// Attendee email addresses from the calendar invite
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl CalendarEvent {
    /// Determines whether this event can be billed at all.
    ///
    /// Cancelled sessions are excluded unless they are flagged as pending
    /// payment, in which case the practice still charges for the slot.
    /// Period bounds are checked separately by the payroll calculator.
    ///
    /// # Returns
    ///
    /// `true` if the event is active, or cancelled with payment pending
    pub fn counts_for_billing(&self) -> bool {
        !self.is_cancelled || self.is_pending_payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_event(is_cancelled: bool, is_pending_payment: bool) -> CalendarEvent {
        CalendarEvent {
            id: "evt-test".to_string(),
            title: "Συνεδρία 10:00".to_string(),
            start_time: Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 4, 11, 0, 0).unwrap(),
            color_id: None,
            is_cancelled,
            is_pending_payment,
            attendees: vec![],
        }
    }

    /// EV-001: Active event is billable
    #[test]
    fn test_active_event_counts_for_billing() {
        let event = create_test_event(false, false);
        assert!(event.counts_for_billing());
    }

    /// EV-002: Cancelled event without pending payment is not billable
    #[test]
    fn test_cancelled_event_does_not_count() {
        let event = create_test_event(true, false);
        assert!(!event.counts_for_billing());
    }

    /// EV-003: Cancelled event with payment pending is still billable
    #[test]
    fn test_cancelled_pending_payment_counts() {
        let event = create_test_event(true, true);
        assert!(event.counts_for_billing());
    }

    /// EV-004: Pending payment on an active event changes nothing
    #[test]
    fn test_active_pending_payment_counts() {
        let event = create_test_event(false, true);
        assert!(event.counts_for_billing());
    }

    /// EV-005: Serialization round trip preserves all fields
    #[test]
    fn test_event_serialization_round_trip() {
        let event = CalendarEvent {
            id: "evt-42".to_string(),
            title: "Κουσουλού Ζωή Ραντεβού".to_string(),
            start_time: Utc.with_ymd_and_hms(2025, 3, 4, 9, 30, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2025, 3, 4, 10, 30, 0).unwrap(),
            color_id: Some("11".to_string()),
            is_cancelled: true,
            is_pending_payment: true,
            attendees: vec!["zoe@example.com".to_string()],
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: CalendarEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }

    /// EV-006: Status flags and attendees default when absent from JSON
    #[test]
    fn test_event_deserialization_with_defaults() {
        let json = r#"{
            "id": "evt-7",
            "title": "Ντρεκαι Ορνελα 10:00",
            "start_time": "2025-03-04T10:00:00Z",
            "end_time": "2025-03-04T11:00:00Z"
        }"#;

        let event: CalendarEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.color_id, None);
        assert!(!event.is_cancelled);
        assert!(!event.is_pending_payment);
        assert!(event.attendees.is_empty());
        assert!(event.counts_for_billing());
    }
}
