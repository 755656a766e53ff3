use crate::error::{DashCalError, DashCalResult};
use crate::event::{DateInput, EventDraft, EventRecord, WireEvent, NO_DEPARTMENT_ID};
use crate::notification::minutes_for_label;
use crate::transform::{format_timestamp, parse_timestamp};

pub trait ToWire {
    fn to_wire(&self) -> DashCalResult<WireEvent>;
}

impl ToWire for EventDraft {
    fn to_wire(&self) -> DashCalResult<WireEvent> {
        // Unsaved drafts have no id yet
        let id = if self.id.is_empty() {
            0
        } else {
            self.id
                .parse()
                .map_err(|_| DashCalError::InvalidEventId(self.id.clone()))?
        };

        let event_time = match &self.date {
            DateInput::Timestamp(dt) => format_timestamp(dt),
            DateInput::Text(raw) => {
                let dt = parse_timestamp(raw).ok_or_else(|| {
                    DashCalError::InvalidDate(format!("'{}' is not a valid date", raw))
                })?;
                format_timestamp(&dt)
            }
        };

        let departments = self
            .departments
            .ids()
            .into_iter()
            .filter(|id| *id != NO_DEPARTMENT_ID)
            .map(|id| {
                id.parse::<u64>()
                    .map_err(|_| DashCalError::InvalidDepartmentId(id.to_string()))
            })
            .collect::<DashCalResult<Vec<_>>>()?;

        Ok(WireEvent {
            id,
            title: self.title.clone(),
            description: Some(self.description.clone().unwrap_or_default()),
            event_time,
            departments,
            link: Some(self.link.clone().unwrap_or_default()),
            image: self.image.clone(),
            notification_time: minutes_for_label(&self.notification),
            view_options: self.view_option.clone(),
            can_edit: self.can_edit,
            can_delete: self.can_delete,
            created_by_name: self.created_by.clone(),
            created_at: self.created_at.as_ref().map(format_timestamp),
            is_active: self.is_active,
        })
    }
}

impl ToWire for EventRecord {
    fn to_wire(&self) -> DashCalResult<WireEvent> {
        EventDraft::from(self).to_wire()
    }
}
