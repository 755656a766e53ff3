//! Loading events and departments from a file or the remote API.

use anyhow::{Context, Result};
use dashcal_core::department::DepartmentCatalog;
use dashcal_core::transform::FromWire;
use dashcal_core::{EventRecord, WireEvent};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

/// The event API returns either a bare list or one wrapped in `data`
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsPayload {
    List(Vec<WireEvent>),
    Wrapped { data: Vec<WireEvent> },
}

impl EventsPayload {
    fn into_events(self) -> Vec<WireEvent> {
        match self {
            EventsPayload::List(events) => events,
            EventsPayload::Wrapped { data } => data,
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    if is_url(source) {
        let response = reqwest::get(source)
            .await
            .with_context(|| format!("Failed to fetch {}", source))?
            .error_for_status()
            .with_context(|| format!("Request to {} failed", source))?;
        return response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", source));
    }

    let contents = tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to read {}", source))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", source))
}

/// Wire events from `source`, untransformed
pub async fn load_wire_events(source: &str) -> Result<Vec<WireEvent>> {
    let events = fetch_json::<EventsPayload>(source).await?.into_events();
    info!(source, count = events.len(), "loaded events");
    Ok(events)
}

/// UI events from `source`. Events with unusable dates are skipped.
pub async fn load_events(source: &str) -> Result<Vec<EventRecord>> {
    let wire = load_wire_events(source).await?;
    Ok(to_records(wire, DepartmentCatalog::builtin()))
}

/// Raw department payload from `source`
pub async fn load_departments(source: &str) -> Result<Value> {
    fetch_json(source).await
}

pub fn to_records(wire: Vec<WireEvent>, catalog: &DepartmentCatalog) -> Vec<EventRecord> {
    wire.into_iter()
        .filter_map(|event| match EventRecord::from_wire(event, catalog) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping event: {}", e);
                None
            }
        })
        .collect()
}
