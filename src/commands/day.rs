use anyhow::Result;
use chrono::NaiveDate;
use dashcal_core::binder::{events_for_day_in, CycleState, Direction};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::render::render_event_line;
use crate::source::load_events;

pub async fn run(date: NaiveDate, step: i32, source: Option<String>, config: &Config) -> Result<()> {
    let tz = config.timezone()?;
    let source = source.as_deref().unwrap_or(&config.events_source);
    let events = load_events(source).await?;

    let todays = events_for_day_in(&events, date, &tz);

    println!("{}", date.format("%A, %B %e %Y").bold());
    if todays.is_empty() {
        println!("   {}", "No events".dimmed());
        return Ok(());
    }

    let mut cycle = CycleState::new();
    let direction = if step < 0 { Direction::Prev } else { Direction::Next };
    for _ in 0..step.unsigned_abs() {
        cycle.step(date, todays.len(), direction);
    }
    let current = cycle.index(date, todays.len());

    for (i, event) in todays.iter().enumerate() {
        let marker = if i == current { "▶".green().to_string() } else { " ".to_string() };
        println!(" {} {}", marker, render_event_line(event, &tz));
    }

    if let Some(event) = cycle.current(date, &todays) {
        println!();
        println!("   {}", format!("{} of {}", current + 1, todays.len()).dimmed());
        if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
            println!("   {}", description);
        }
        if let Some(link) = event.link.as_deref().filter(|l| !l.is_empty()) {
            println!("   {}", link.underline());
        }
    }

    Ok(())
}
