//! Notification offsets and their display labels.

use serde::{Deserialize, Serialize};

/// Label shown when an offset has no entry in the table.
pub const DEFAULT_NOTIFICATION_LABEL: &str = "Select Time";

/// How long before an event its notification fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationOffset {
    AtEventTime,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    OneDay,
}

impl NotificationOffset {
    pub const ALL: [NotificationOffset; 6] = [
        NotificationOffset::AtEventTime,
        NotificationOffset::FiveMinutes,
        NotificationOffset::FifteenMinutes,
        NotificationOffset::ThirtyMinutes,
        NotificationOffset::OneHour,
        NotificationOffset::OneDay,
    ];

    pub fn minutes(self) -> i64 {
        match self {
            NotificationOffset::AtEventTime => 0,
            NotificationOffset::FiveMinutes => 5,
            NotificationOffset::FifteenMinutes => 15,
            NotificationOffset::ThirtyMinutes => 30,
            NotificationOffset::OneHour => 60,
            NotificationOffset::OneDay => 1440,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationOffset::AtEventTime => "At time of event",
            NotificationOffset::FiveMinutes => "5 minutes before",
            NotificationOffset::FifteenMinutes => "15 minutes before",
            NotificationOffset::ThirtyMinutes => "30 minutes before",
            NotificationOffset::OneHour => "1 hour before",
            NotificationOffset::OneDay => "1 day before",
        }
    }

    pub fn from_minutes(minutes: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.minutes() == minutes)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

/// Label for a wire offset; unknown values get [`DEFAULT_NOTIFICATION_LABEL`].
pub fn label_for_minutes(minutes: i64) -> String {
    NotificationOffset::from_minutes(minutes)
        .map(NotificationOffset::label)
        .unwrap_or(DEFAULT_NOTIFICATION_LABEL)
        .to_string()
}

/// Wire offset for a label; unknown labels (including the default) map to 0.
pub fn minutes_for_label(label: &str) -> i64 {
    NotificationOffset::from_label(label)
        .map(NotificationOffset::minutes)
        .unwrap_or(0)
}

/// Labels in dropdown order, the placeholder first.
pub fn label_options() -> Vec<&'static str> {
    std::iter::once(DEFAULT_NOTIFICATION_LABEL)
        .chain(NotificationOffset::ALL.iter().map(|o| o.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_offset_roundtrips_through_its_label() {
        for offset in NotificationOffset::ALL {
            assert_eq!(minutes_for_label(offset.label()), offset.minutes());
            assert_eq!(label_for_minutes(offset.minutes()), offset.label());
        }
    }

    #[test]
    fn test_unknown_minutes_fall_back_to_placeholder() {
        assert_eq!(label_for_minutes(7), "Select Time");
        assert_eq!(label_for_minutes(-5), "Select Time");
    }

    #[test]
    fn test_unknown_label_falls_back_to_zero() {
        assert_eq!(minutes_for_label("whenever"), 0);
        assert_eq!(minutes_for_label(DEFAULT_NOTIFICATION_LABEL), 0);
    }

    #[test]
    fn test_label_options_start_with_placeholder() {
        let options = label_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], "Select Time");
        assert_eq!(options[6], "1 day before");
    }
}
