//! Event and department types.
//!
//! Two shapes of the same event exist: [`WireEvent`] is what the remote API
//! sends and accepts (flat ids, minute offsets, ISO strings), [`EventRecord`]
//! is what the views render (department objects, notification labels,
//! timestamps). [`EventDraft`] is an event being submitted from a form.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{DashCalError, DashCalResult};

/// Department id meaning "no department".
pub const NO_DEPARTMENT_ID: &str = "none";

/// An event as exchanged with the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEvent {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 timestamp
    pub event_time: String,
    #[serde(default)]
    pub departments: Vec<u64>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Minutes before the event
    #[serde(default)]
    pub notification_time: i64,
    #[serde(default)]
    pub view_options: String,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// An event as rendered by the views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub departments: Vec<DepartmentView>,
    #[serde(default)]
    pub link: Option<String>,
    /// Human-readable notification label
    pub notification: String,
    pub view_option: String,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// A department ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentView {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    /// Image URL or letter code
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Additional catalog metadata
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl DepartmentView {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        DepartmentView {
            id: id.into(),
            name: name.into(),
            avatar: None,
            color: None,
            extra: BTreeMap::new(),
        }
    }

    /// Letter code shown when no avatar is set
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// A department as listed by the remote API (id and name only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDepartment {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
}

/// Departments chosen in an event form.
///
/// Older forms submit a single `department`, newer ones a `departments`
/// list of ids or objects; callers settle on one shape before converting.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DepartmentSelection {
    #[default]
    None,
    SingleId(String),
    IdList(Vec<String>),
    ObjectList(Vec<DepartmentView>),
}

impl DepartmentSelection {
    /// Selected ids, in selection order
    pub fn ids(&self) -> Vec<&str> {
        match self {
            DepartmentSelection::None => Vec::new(),
            DepartmentSelection::SingleId(id) => vec![id.as_str()],
            DepartmentSelection::IdList(ids) => ids.iter().map(String::as_str).collect(),
            DepartmentSelection::ObjectList(departments) => {
                departments.iter().map(|d| d.id.as_str()).collect()
            }
        }
    }

    /// Resolve the legacy form JSON shapes.
    ///
    /// Precedence: a `department` array, then a `departments` array, then a
    /// single `department` object carrying an `id`, else nothing.
    pub fn from_legacy_json(form: &Value) -> Self {
        let department = form.get("department");

        if let Some(Value::Array(items)) = department {
            return DepartmentSelection::IdList(ids_of(items));
        }
        if let Some(Value::Array(items)) = form.get("departments") {
            return DepartmentSelection::IdList(ids_of(items));
        }
        if let Some(id) = department
            .and_then(|d| d.as_object())
            .and_then(|d| d.get("id"))
            .and_then(json_id)
        {
            return DepartmentSelection::SingleId(id);
        }

        DepartmentSelection::None
    }
}

/// A date as entered in a form: already a timestamp, or raw text to parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Timestamp(DateTime<Utc>),
    Text(String),
}

/// An event being submitted from an edit form
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub title: String,
    pub date: DateInput,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(skip)]
    pub departments: DepartmentSelection,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub notification: String,
    #[serde(default)]
    pub view_option: String,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl EventDraft {
    /// Parse a submitted form, settling the department shape on the way.
    pub fn from_form_json(form: Value) -> DashCalResult<Self> {
        let departments = DepartmentSelection::from_legacy_json(&form);
        let mut draft: EventDraft = serde_json::from_value(form)
            .map_err(|e| DashCalError::Serialization(e.to_string()))?;
        draft.departments = departments;
        Ok(draft)
    }
}

impl From<&EventRecord> for EventDraft {
    fn from(record: &EventRecord) -> Self {
        EventDraft {
            id: record.id.clone(),
            title: record.title.clone(),
            date: DateInput::Timestamp(record.date),
            description: record.description.clone(),
            image: record.image.clone(),
            departments: DepartmentSelection::ObjectList(record.departments.clone()),
            link: record.link.clone(),
            notification: record.notification.clone(),
            view_option: record.view_option.clone(),
            can_edit: record.can_edit,
            can_delete: record.can_delete,
            created_by: record.created_by.clone(),
            created_at: record.created_at,
            is_active: record.is_active,
        }
    }
}

fn ids_of(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(obj) => obj.get("id").and_then(json_id),
            other => json_id(other),
        })
        .collect()
}

fn json_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Ids arrive as numbers from the API and as strings from the catalog.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
