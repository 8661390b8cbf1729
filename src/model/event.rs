use std::fmt;

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Department, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A resolved invitee or check-in: display name plus user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub id: UserId,
}

/// An attendance-tracked gathering, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub departments: Vec<Department>,
    /// Check-ins. Always empty at creation.
    pub attendees: Vec<Attendee>,
    pub invited_attendees: Vec<Attendee>,
    pub has_started: bool,
    /// Data URL of the check-in QR code, or `""` when none was requested.
    pub qr_code: String,
}

/// Request to create an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub departments: Vec<Department>,
    pub attendees: Vec<UserId>,
    pub is_qr_required: bool,
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse an instant given as RFC 3339, or as a zone-less
/// `YYYY-MM-DDTHH:MM[:SS]` which is read as UTC.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }
    bail!("invalid timestamp '{input}' (expected RFC 3339 or YYYY-MM-DDTHH:MM)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_minute_precision_as_utc() {
        let at = parse_instant("2024-01-01T09:00").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let at = parse_instant("2024-01-01T11:00:00+02:00").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn parses_seconds_without_zone() {
        let at = parse_instant(" 2024-03-05T18:30:15 ").unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 15).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("next tuesday").is_err());
        assert!(parse_instant("").is_err());
    }

    #[test]
    fn event_persists_in_camel_case() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let event = Event {
            id: EventId(Uuid::nil()),
            name: "Kickoff".to_string(),
            start_date: start,
            end_date: start,
            departments: vec![Department::Engineering],
            attendees: vec![],
            invited_attendees: vec![Attendee {
                name: "Ada".to_string(),
                id: UserId::from("u1"),
            }],
            has_started: false,
            qr_code: String::new(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["hasStarted"], false);
        assert_eq!(json["qrCode"], "");
        assert_eq!(json["invitedAttendees"][0]["name"], "Ada");
        assert_eq!(json["invitedAttendees"][0]["id"], "u1");
        assert_eq!(json["attendees"], serde_json::json!([]));
        assert_eq!(json["departments"], serde_json::json!(["engineering"]));
        assert!(json.get("startDate").is_some());
    }
}
