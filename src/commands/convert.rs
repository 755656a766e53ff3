use std::path::Path;

use anyhow::{Context, Result};
use dashcal_core::department::DepartmentCatalog;
use dashcal_core::transform::{FromWire, ToWire};
use dashcal_core::{EventDraft, EventRecord, WireEvent};
use serde_json::Value;

/// Which shape `convert` produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
    /// Wire events in, UI events out
    Ui,
    /// UI events (edit forms) in, wire events out
    Wire,
}

pub fn run(file: &Path, to: Target) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let output = match to {
        Target::Ui => serde_json::to_string_pretty(&wire_to_ui(&contents)?)?,
        Target::Wire => serde_json::to_string_pretty(&ui_to_wire(&contents)?)?,
    };

    println!("{}", output);
    Ok(())
}

pub fn wire_to_ui(contents: &str) -> Result<Vec<EventRecord>> {
    let wire: Vec<WireEvent> =
        serde_json::from_str(contents).context("Expected a JSON array of wire events")?;
    let catalog = DepartmentCatalog::builtin();

    wire.into_iter()
        .map(|event| {
            let id = event.id;
            EventRecord::from_wire(event, catalog)
                .with_context(|| format!("Failed to convert event {}", id))
        })
        .collect()
}

pub fn ui_to_wire(contents: &str) -> Result<Vec<WireEvent>> {
    let forms: Vec<Value> =
        serde_json::from_str(contents).context("Expected a JSON array of UI events")?;

    forms
        .into_iter()
        .enumerate()
        .map(|(i, form)| {
            EventDraft::from_form_json(form)
                .and_then(|draft| draft.to_wire())
                .with_context(|| format!("Failed to convert event #{}", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_to_ui_and_back() {
        let wire = json!([{
            "id": 7,
            "title": "Standup",
            "event_time": "2024-03-01T09:00:00.000Z",
            "departments": [1],
            "notification_time": 15,
            "view_options": "private",
        }])
        .to_string();

        let ui = wire_to_ui(&wire).unwrap();
        assert_eq!(ui[0].notification, "15 minutes before");

        let ui_json = serde_json::to_string(&ui).unwrap();
        assert!(ui_json.contains("\"viewOption\":\"private\""));

        let back = ui_to_wire(&ui_json).unwrap();
        assert_eq!(back[0].id, 7);
        assert_eq!(back[0].departments, vec![1]);
        assert_eq!(back[0].notification_time, 15);
        assert_eq!(back[0].event_time, "2024-03-01T09:00:00.000Z");
    }

    #[test]
    fn test_ui_to_wire_reports_bad_date() {
        let forms = json!([{"title": "Broken", "date": "Invalid Date"}]).to_string();
        let err = ui_to_wire(&forms).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid date"));
    }

    #[test]
    fn test_wire_to_ui_rejects_non_array() {
        assert!(wire_to_ui("{}").is_err());
    }
}
