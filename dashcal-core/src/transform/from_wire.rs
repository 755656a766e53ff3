use tracing::warn;

use crate::department::DepartmentCatalog;
use crate::error::{DashCalError, DashCalResult};
use crate::event::{EventRecord, WireEvent};
use crate::notification::label_for_minutes;
use crate::transform::parse_timestamp;

pub trait FromWire {
    fn from_wire(wire: WireEvent, catalog: &DepartmentCatalog) -> DashCalResult<Self>
    where
        Self: Sized;
}

impl FromWire for EventRecord {
    fn from_wire(wire: WireEvent, catalog: &DepartmentCatalog) -> DashCalResult<Self> {
        let date = parse_timestamp(&wire.event_time).ok_or_else(|| {
            DashCalError::InvalidDate(format!(
                "event {} has unparseable event_time '{}'",
                wire.id, wire.event_time
            ))
        })?;

        // Only departments the catalog knows can be rendered
        let departments = catalog.resolve(wire.departments.iter().map(u64::to_string));

        let created_at = wire.created_at.as_deref().and_then(|raw| {
            let parsed = parse_timestamp(raw);
            if parsed.is_none() {
                warn!(event_id = wire.id, created_at = raw, "ignoring unparseable created_at");
            }
            parsed
        });

        Ok(EventRecord {
            id: wire.id.to_string(),
            title: wire.title,
            date,
            description: wire.description,
            image: wire.image,
            departments,
            link: wire.link,
            notification: label_for_minutes(wire.notification_time),
            view_option: wire.view_options,
            can_edit: wire.can_edit,
            can_delete: wire.can_delete,
            created_by: wire.created_by_name,
            created_at,
            is_active: wire.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn wire(value: serde_json::Value) -> WireEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_from_wire_maps_fields() {
        let record = EventRecord::from_wire(
            wire(json!({
                "id": 12,
                "title": "Quarterly review",
                "description": "Numbers",
                "event_time": "2024-03-01T09:30:00.000Z",
                "departments": [2, 1],
                "link": "https://example.com",
                "notification_time": 60,
                "view_options": "public",
                "can_edit": true,
                "can_delete": true,
                "created_by_name": "Tomas Berg",
                "created_at": "2024-02-01T12:00:00Z",
                "is_active": false,
            })),
            DepartmentCatalog::builtin(),
        )
        .unwrap();

        assert_eq!(record.id, "12");
        assert_eq!(record.date, Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
        let names: Vec<&str> = record.departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Development", "Design"]);
        assert_eq!(record.notification, "1 hour before");
        assert_eq!(record.view_option, "public");
        assert_eq!(record.created_by.as_deref(), Some("Tomas Berg"));
        assert_eq!(
            record.created_at,
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(record.is_active, Some(false));
    }

    #[test]
    fn test_from_wire_drops_unknown_department() {
        let record = EventRecord::from_wire(
            wire(json!({
                "id": 1,
                "title": "Offsite",
                "event_time": "2024-05-01T00:00:00Z",
                "departments": [999],
            })),
            DepartmentCatalog::builtin(),
        )
        .unwrap();
        assert!(record.departments.is_empty());
    }

    #[test]
    fn test_from_wire_unknown_notification_gets_placeholder() {
        let record = EventRecord::from_wire(
            wire(json!({
                "id": 1,
                "title": "Offsite",
                "event_time": "2024-05-01T00:00:00Z",
                "notification_time": 45,
            })),
            DepartmentCatalog::builtin(),
        )
        .unwrap();
        assert_eq!(record.notification, "Select Time");
    }

    #[test]
    fn test_from_wire_bad_created_at_defaults_to_none() {
        let record = EventRecord::from_wire(
            wire(json!({
                "id": 1,
                "title": "Offsite",
                "event_time": "2024-05-01T00:00:00Z",
                "created_at": "yesterday",
            })),
            DepartmentCatalog::builtin(),
        )
        .unwrap();
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_from_wire_rejects_bad_event_time() {
        let result = EventRecord::from_wire(
            wire(json!({
                "id": 1,
                "title": "Offsite",
                "event_time": "not a date",
            })),
            DepartmentCatalog::builtin(),
        );
        assert!(matches!(result, Err(DashCalError::InvalidDate(_))));
    }
}
