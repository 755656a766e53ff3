//! Bundled department catalog and enrichment of API departments.
//!
//! The API only knows department ids and names. Avatars, colors and other
//! display metadata come from a catalog compiled into the application,
//! keyed by id. The catalog is built once and never modified.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde_json::Value;
use tracing::debug;

use crate::event::{ApiDepartment, DepartmentView, NO_DEPARTMENT_ID};

/// Number of department avatars the views show before the "+N" badge.
pub const AVATARS_SHOWN: usize = 2;

static BUILTIN: LazyLock<DepartmentCatalog> = LazyLock::new(|| {
    DepartmentCatalog::new(vec![
        entry(NO_DEPARTMENT_ID, "No department", None, "#9CA3AF", &[]),
        entry("1", "Design", Some("DS"), "#F59E0B", &[("lead", "Ana Ruiz")]),
        entry(
            "2",
            "Development",
            Some("https://assets.dashcal.dev/departments/development.png"),
            "#3B82F6",
            &[("lead", "Tomas Berg")],
        ),
        entry("3", "Marketing", Some("MK"), "#EC4899", &[]),
        entry("4", "Sales", Some("SL"), "#10B981", &[]),
        entry("5", "Human Resources", Some("HR"), "#8B5CF6", &[]),
        entry(
            "6",
            "Finance",
            Some("https://assets.dashcal.dev/departments/finance.png"),
            "#EF4444",
            &[],
        ),
        entry("7", "Customer Success", Some("CS"), "#14B8A6", &[]),
    ])
});

fn entry(
    id: &str,
    name: &str,
    avatar: Option<&str>,
    color: &str,
    extra: &[(&str, &str)],
) -> DepartmentView {
    DepartmentView {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.map(str::to_string),
        color: Some(color.to_string()),
        extra: extra
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// Display metadata for departments, keyed by id
#[derive(Debug, Clone, Default)]
pub struct DepartmentCatalog {
    entries: Vec<DepartmentView>,
}

impl DepartmentCatalog {
    pub fn new(entries: Vec<DepartmentView>) -> Self {
        DepartmentCatalog { entries }
    }

    /// The catalog bundled with the application.
    pub fn builtin() -> &'static DepartmentCatalog {
        &BUILTIN
    }

    pub fn get(&self, id: &str) -> Option<&DepartmentView> {
        self.entries.iter().find(|d| d.id == id)
    }

    /// Look up each id in order. Ids the catalog does not know are dropped.
    pub fn resolve<I, S>(&self, ids: I) -> Vec<DepartmentView>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| {
                let id = id.as_ref();
                let found = self.get(id).cloned();
                if found.is_none() {
                    debug!(department_id = id, "dropping department unknown to the catalog");
                }
                found
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepartmentView> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merge API departments with catalog metadata.
///
/// The API's `id` and `name` win over catalog values; departments missing
/// from the catalog come back without avatar or color.
pub fn enrich(departments: &[ApiDepartment], catalog: &DepartmentCatalog) -> Vec<DepartmentView> {
    departments
        .iter()
        .map(|api| match catalog.get(&api.id) {
            Some(local) => DepartmentView {
                id: api.id.clone(),
                name: api.name.clone(),
                ..local.clone()
            },
            None => DepartmentView::new(api.id.clone(), api.name.clone()),
        })
        .collect()
}

/// [`enrich`] for an untyped API payload.
///
/// Anything other than an array yields no departments; array items that are
/// not `{id, name}` objects are skipped.
pub fn enrich_value(payload: &Value, catalog: &DepartmentCatalog) -> Vec<DepartmentView> {
    let Some(items) = payload.as_array() else {
        debug!("department payload is not an array");
        return Vec::new();
    };

    let departments: Vec<ApiDepartment> = items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();

    enrich(&departments, catalog)
}

/// The first `shown` departments and how many more there are.
pub fn avatar_stack(departments: &[DepartmentView], shown: usize) -> (&[DepartmentView], usize) {
    let visible = departments.len().min(shown);
    (&departments[..visible], departments.len() - visible)
}
