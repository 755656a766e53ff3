//! Terminal rendering for dashcal types.
//!
//! Plain text is padded to width first and colored afterwards, so escape
//! codes never throw off the grid alignment.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone};
use dashcal_core::date_grid::{CalendarMonth, Week};
use dashcal_core::department::{avatar_stack, AVATARS_SHOWN};
use dashcal_core::{DepartmentView, EventRecord};
use owo_colors::OwoColorize;

/// Width of one day cell in the month grid
const CELL_WIDTH: usize = 13;

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DepartmentView {
    fn render(&self) -> String {
        format!("{} {}", badge(self), self.name)
    }
}

/// Short colored badge: the avatar letter code, or initials for image avatars
fn badge(department: &DepartmentView) -> String {
    let code = match department.avatar.as_deref() {
        Some(avatar) if !avatar.contains('/') => avatar.to_string(),
        _ => department.initials(),
    };
    let code = if code.is_empty() { "--".to_string() } else { code };

    match department.color.as_deref().and_then(parse_hex_color) {
        Some((r, g, b)) => code.truecolor(r, g, b).bold().to_string(),
        None => code.dimmed().to_string(),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// First two department badges plus a "+N" for the rest
pub fn render_avatar_stack(departments: &[DepartmentView]) -> String {
    let (shown, more) = avatar_stack(departments, AVATARS_SHOWN);
    let mut parts: Vec<String> = shown.iter().map(badge).collect();
    if more > 0 {
        parts.push(format!("+{}", more).dimmed().to_string());
    }
    parts.join(" ")
}

/// One line for an event: time, title, departments
pub fn render_event_line<Tz: TimeZone>(event: &EventRecord, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let time = event.date.with_timezone(tz).format("%H:%M").to_string();
    let mut line = format!("{} {}", time.dimmed(), event.title.bold());
    if !event.departments.is_empty() {
        line.push_str(&format!("  {}", render_avatar_stack(&event.departments)));
    }
    if event.notification != dashcal_core::notification::DEFAULT_NOTIFICATION_LABEL {
        line.push_str(&format!("  ({})", event.notification).dimmed().to_string());
    }
    line
}

/// Month grid with the first event of each day and a count of the others
pub fn render_month(
    month: &CalendarMonth,
    weeks: &[Week],
    bound: &BTreeMap<NaiveDate, Vec<&EventRecord>>,
    today: NaiveDate,
) -> String {
    let mut lines = vec![month.title().bold().to_string()];

    lines.push(
        WEEKDAYS
            .iter()
            .map(|d| pad(d).dimmed().to_string())
            .collect::<String>(),
    );

    for week in weeks {
        let numbers: String = week
            .iter()
            .map(|day| {
                let cell = pad(&day.format("%e").to_string());
                if *day == today {
                    cell.reversed().to_string()
                } else if month.contains(*day) {
                    cell
                } else {
                    cell.dimmed().to_string()
                }
            })
            .collect();
        lines.push(numbers);

        let titles: String = week
            .iter()
            .map(|day| match bound.get(day) {
                Some(events) => pad(&cell_summary(events)).cyan().to_string(),
                None => pad(""),
            })
            .collect();
        lines.push(titles);
    }

    lines.join("\n")
}

/// Title of the first event, truncated to fit next to a "+N" for the rest
fn cell_summary(events: &[&EventRecord]) -> String {
    let Some(first) = events.first() else {
        return String::new();
    };
    let more = events.len() - 1;
    let suffix = if more > 0 { format!(" +{}", more) } else { String::new() };
    let room = CELL_WIDTH - 1 - suffix.chars().count();
    format!("{}{}", truncate(&first.title, room), suffix)
}

/// Department list shown beside the grid
pub fn render_sidebar(departments: &[DepartmentView]) -> String {
    let mut lines = vec!["Departments".bold().to_string()];
    if departments.is_empty() {
        lines.push("   (none)".dimmed().to_string());
    }
    for department in departments {
        lines.push(format!("   {}", department.render()));
    }
    lines.join("\n")
}

fn pad(text: &str) -> String {
    format!("{:<width$}", text, width = CELL_WIDTH)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
