//! Binding events to calendar days and cycling through a day's events.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::date_grid::{day_key, Week};
use crate::event::EventRecord;

/// Which way to move through a day's events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Events falling on `day` in UTC, in input order.
pub fn events_for_day(events: &[EventRecord], day: NaiveDate) -> Vec<&EventRecord> {
    events_for_day_in(events, day, &Utc)
}

/// Events whose date, seen in `tz`, is `day`. Input order is kept.
pub fn events_for_day_in<'a, Tz: TimeZone>(
    events: &'a [EventRecord],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<&'a EventRecord> {
    events
        .iter()
        .filter(|event| event.date.with_timezone(tz).date_naive() == day)
        .collect()
}

/// Bind every event to its cell of `weeks` in one pass.
///
/// Days without events are absent from the map; events outside the grid
/// are ignored.
pub fn bind_grid<'a, Tz: TimeZone>(
    weeks: &[Week],
    events: &'a [EventRecord],
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<&'a EventRecord>> {
    let mut bound: BTreeMap<NaiveDate, Vec<&EventRecord>> = BTreeMap::new();

    let (Some(first), Some(last)) = (weeks.first(), weeks.last()) else {
        return bound;
    };
    let range = first[0]..=last[6];

    for event in events {
        let day = event.date.with_timezone(tz).date_naive();
        if range.contains(&day) {
            bound.entry(day).or_default().push(event);
        }
    }

    bound
}

/// Move `current` one step through `len` events, wrapping at both ends.
/// With no events the index is meaningless and 0 is returned.
pub fn cycle(len: usize, current: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    match direction {
        Direction::Prev if current == 0 => len - 1,
        Direction::Prev => current - 1,
        Direction::Next => (current + 1) % len,
    }
}

/// Which event is showing for each day.
///
/// Positions are stored per day, so stepping through one day's events
/// leaves every other day where it was.
#[derive(Debug, Clone, Default)]
pub struct CycleState {
    positions: HashMap<String, usize>,
}

impl CycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position for `day`, always below `len` (0 when `len` is 0).
    pub fn index(&self, day: NaiveDate, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.positions
            .get(&day_key(day))
            .copied()
            .unwrap_or(0)
            .min(len - 1)
    }

    /// Step `day` one event in `direction` and return the new position.
    pub fn step(&mut self, day: NaiveDate, len: usize, direction: Direction) -> usize {
        let next = cycle(len, self.index(day, len), direction);
        debug!(day = %day, ?direction, index = next, "cycled day events");
        self.positions.insert(day_key(day), next);
        next
    }

    /// The event currently showing among `events` (the day's events).
    pub fn current<'a>(&self, day: NaiveDate, events: &[&'a EventRecord]) -> Option<&'a EventRecord> {
        events.get(self.index(day, events.len())).copied()
    }

    pub fn reset(&mut self, day: NaiveDate) {
        self.positions.remove(&day_key(day));
    }
}
