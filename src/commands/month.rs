use anyhow::Result;
use chrono::Utc;
use dashcal_core::binder::bind_grid;
use dashcal_core::date_grid::CalendarMonth;
use dashcal_core::department::{enrich_value, DepartmentCatalog};
use dashcal_core::preferences::{FileStore, LayoutState};
use dashcal_core::{DepartmentView, NO_DEPARTMENT_ID};

use crate::config::{Config, GridStyle};
use crate::render::{render_month, render_sidebar};
use crate::source::{load_departments, load_events};

pub async fn run(
    year: Option<i32>,
    month: Option<u32>,
    source: Option<String>,
    compact: bool,
    config: &Config,
) -> Result<()> {
    let tz = config.timezone()?;
    let today = Utc::now().with_timezone(&tz).date_naive();
    let current = CalendarMonth::from_date(today);

    let shown = CalendarMonth::new(
        year.unwrap_or(current.year()),
        month.map(|m| m as i32 - 1).unwrap_or(current.month0() as i32),
    );

    let source = source.as_deref().unwrap_or(&config.events_source);
    let events = load_events(source).await?;

    let weeks = if compact || config.grid == GridStyle::Compact {
        shown.grid()
    } else {
        shown.fixed_grid().to_vec()
    };
    let bound = bind_grid(&weeks, &events, &tz);

    println!("{}", render_month(&shown, &weeks, &bound, today));

    let layout = LayoutState::load(&FileStore::new(config.preferences_path()?))?;
    if !layout.sidebar_collapsed() {
        println!();
        println!("{}", render_sidebar(&sidebar_departments(config).await?));
    }

    Ok(())
}

/// Departments from the API when configured, else the bundled catalog
async fn sidebar_departments(config: &Config) -> Result<Vec<DepartmentView>> {
    let catalog = DepartmentCatalog::builtin();

    if let Some(source) = &config.departments_source {
        let payload = load_departments(source).await?;
        return Ok(enrich_value(&payload, catalog));
    }

    Ok(catalog
        .iter()
        .filter(|d| d.id != NO_DEPARTMENT_ID)
        .cloned()
        .collect())
}
