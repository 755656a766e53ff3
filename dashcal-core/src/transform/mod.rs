//! Conversion between wire events and UI events.
//!
//! `FromWire` runs on everything the API returns before it reaches a view;
//! `ToWire` runs on every edit before it is submitted back.

mod from_wire;
mod to_wire;

pub use from_wire::FromWire;
pub use to_wire::ToWire;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse the timestamp formats the API and the forms produce.
///
/// Accepts RFC 3339 (any offset), a naive date-time (taken as UTC) or a
/// plain date (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-03-01T09:00:00.000Z`.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::department::DepartmentCatalog;
    use crate::event::{EventRecord, WireEvent};
    use chrono::TimeZone;

    fn standup() -> WireEvent {
        WireEvent {
            id: 7,
            title: "Standup".to_string(),
            description: Some("Daily sync".to_string()),
            event_time: "2024-03-01T09:00:00.000Z".to_string(),
            departments: vec![1],
            link: Some("https://meet.example.com/standup".to_string()),
            image: None,
            notification_time: 15,
            view_options: "private".to_string(),
            can_edit: true,
            can_delete: false,
            created_by_name: Some("Ana Ruiz".to_string()),
            created_at: Some("2024-02-20T08:30:00Z".to_string()),
            is_active: Some(true),
        }
    }

    #[test]
    fn test_roundtrip_preserves_wire_fields() {
        let wire = standup();
        let record = EventRecord::from_wire(wire.clone(), DepartmentCatalog::builtin()).unwrap();
        let back = record.to_wire().unwrap();

        assert_eq!(back.id, 7);
        assert_eq!(back.title, "Standup");
        assert_eq!(back.event_time, "2024-03-01T09:00:00.000Z");
        assert_eq!(back.departments, vec![1]);
        assert_eq!(back.notification_time, 15);
        assert_eq!(back.view_options, "private");
        assert_eq!(back.link, wire.link);
        assert_eq!(back.description, wire.description);
    }

    #[test]
    fn test_roundtrip_departments_as_set() {
        let mut wire = standup();
        wire.departments = vec![4, 2, 6];
        let record = EventRecord::from_wire(wire, DepartmentCatalog::builtin()).unwrap();
        let mut back = record.to_wire().unwrap().departments;
        back.sort();
        assert_eq!(back, vec![2, 4, 6]);
    }

    #[test]
    fn test_roundtrip_loses_unknown_departments() {
        let mut wire = standup();
        wire.departments = vec![1, 999];
        let record = EventRecord::from_wire(wire, DepartmentCatalog::builtin()).unwrap();
        assert_eq!(record.to_wire().unwrap().departments, vec![1]);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01T09:00:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T10:00:00+01:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T09:00:00"), Some(expected));
        assert_eq!(parse_timestamp(" 2024-03-01 09:00:00 "), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T09:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("Invalid Date"), None);
        assert_eq!(parse_timestamp("2024-02-30"), None);
    }

    #[test]
    fn test_format_timestamp_uses_millis_and_z() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "2024-03-01T09:00:00.000Z");
    }
}
