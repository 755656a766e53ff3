//! Monday-first month grids.
//!
//! A grid is a sequence of whole weeks covering a month, padded with the
//! trailing days of the previous month and the leading days of the next one.
//! Months are addressed by a zero-based index; out-of-range indices roll over
//! into the neighbouring years (`-1` is December of the previous year).

use chrono::{Datelike, Duration, NaiveDate};

/// Seven consecutive days, Monday first.
pub type Week = [NaiveDate; 7];

/// Number of rows in the fixed month view.
pub const FIXED_GRID_WEEKS: usize = 6;

/// A calendar month, normalized so that `month0` is always in `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    year: i32,
    month0: u32,
}

impl CalendarMonth {
    /// Build a month from a year and a zero-based month index.
    /// Indices outside `0..=11` overflow into adjacent years.
    pub fn new(year: i32, month0: i32) -> Self {
        CalendarMonth {
            year: year + month0.div_euclid(12),
            month0: month0.rem_euclid(12) as u32,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() as i32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (January = 0).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month number (January = 1).
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn prev(&self) -> Self {
        Self::new(self.year, self.month0 as i32 - 1)
    }

    pub fn next(&self) -> Self {
        Self::new(self.year, self.month0 as i32 + 1)
    }

    /// The 1st of the month.
    ///
    /// Panics if the year is outside the range chrono can represent.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1)
            .expect("year outside the supported calendar range")
    }

    pub fn days_in_month(&self) -> u32 {
        let days = self
            .next()
            .first_day()
            .signed_duration_since(self.first_day())
            .num_days();
        days as u32
    }

    /// Whether `date` falls inside this month (as opposed to a padding cell).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Human-readable title, e.g. "March 2024".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Whole weeks covering the month, as few as needed.
    pub fn grid(&self) -> Vec<Week> {
        let cells = self.leading_days() + self.days_in_month() as usize;
        weeks_from(self.grid_start(), cells.div_ceil(7))
    }

    /// Always six weeks (42 cells), as used by the month view.
    pub fn fixed_grid(&self) -> [Week; FIXED_GRID_WEEKS] {
        let start = self.grid_start();
        std::array::from_fn(|week| week_at(start, week))
    }

    /// Days of the previous month shown before the 1st.
    ///
    /// With Sunday = 0 this is `(weekday + 6) % 7`: a month starting on
    /// Sunday needs six leading days, one starting on Monday needs none.
    pub fn leading_days(&self) -> usize {
        self.first_day().weekday().num_days_from_monday() as usize
    }

    fn grid_start(&self) -> NaiveDate {
        self.first_day() - Duration::days(self.leading_days() as i64)
    }
}

/// Grid for `month0` (zero-based) of `year`, with as many weeks as needed.
pub fn month_grid(year: i32, month0: i32) -> Vec<Week> {
    CalendarMonth::new(year, month0).grid()
}

/// Six-week grid for `month0` (zero-based) of `year`.
pub fn fixed_month_grid(year: i32, month0: i32) -> [Week; FIXED_GRID_WEEKS] {
    CalendarMonth::new(year, month0).fixed_grid()
}

/// Canonical day-string used to key per-day state.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn weeks_from(start: NaiveDate, count: usize) -> Vec<Week> {
    (0..count).map(|week| week_at(start, week)).collect()
}

fn week_at(start: NaiveDate, week: usize) -> Week {
    std::array::from_fn(|day| start + Duration::days((week * 7 + day) as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn all_months() -> impl Iterator<Item = (i32, i32)> {
        (1899..=2101).flat_map(|year| (0..12).map(move |month0| (year, month0)))
    }

    #[test]
    fn test_grid_is_whole_weeks_starting_monday() {
        for (year, month0) in all_months() {
            let weeks = month_grid(year, month0);
            assert!(!weeks.is_empty());
            assert_eq!(weeks[0][0].weekday(), Weekday::Mon, "{year}-{month0}");
            for week in &weeks {
                assert_eq!(week[6].weekday(), Weekday::Sun);
            }
        }
    }

    #[test]
    fn test_grid_is_continuous() {
        for (year, month0) in all_months() {
            let days: Vec<NaiveDate> = month_grid(year, month0).into_iter().flatten().collect();
            for pair in days.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1), "{year}-{month0}");
            }
        }
    }

    #[test]
    fn test_grid_covers_whole_month() {
        for (year, month0) in all_months() {
            let month = CalendarMonth::new(year, month0);
            let in_month = month_grid(year, month0)
                .into_iter()
                .flatten()
                .filter(|d| month.contains(*d))
                .count();
            assert_eq!(in_month as u32, month.days_in_month());
        }
    }

    #[test]
    fn test_leap_day_present_only_in_leap_years() {
        let leap: Vec<NaiveDate> = month_grid(2024, 1).into_iter().flatten().collect();
        assert_eq!(leap.iter().filter(|d| **d == date(2024, 2, 29)).count(), 1);

        let common: Vec<NaiveDate> = month_grid(2023, 1).into_iter().flatten().collect();
        assert!(common.iter().all(|d| !(d.month() == 2 && d.day() == 29)));
        assert_eq!(common.iter().filter(|d| d.month() == 2).count(), 28);
    }

    #[test]
    fn test_sunday_start_needs_six_leading_days() {
        // September 2024 starts on a Sunday
        let month = CalendarMonth::new(2024, 8);
        assert_eq!(month.leading_days(), 6);

        let weeks = month.grid();
        assert_eq!(weeks[0][0], date(2024, 8, 26));
        assert_eq!(weeks[0][6], date(2024, 9, 1));
        assert_eq!(weeks.len(), 6);
    }

    #[test]
    fn test_monday_start_february_fits_four_weeks() {
        // February 2021 starts on a Monday and has 28 days
        let weeks = month_grid(2021, 1);
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], date(2021, 2, 1));
        assert_eq!(weeks[3][6], date(2021, 2, 28));
    }

    #[test]
    fn test_fixed_grid_has_42_cells() {
        // December 2024: 31 days starting on a Sunday
        let grid = fixed_month_grid(2024, 11);
        assert_eq!(grid.len() * 7, 42);
        assert_eq!(grid[0][0], date(2024, 11, 25));
        assert_eq!(grid[5][6], date(2025, 1, 5));

        // February 2021 gets two weeks of trailing days
        let grid = fixed_month_grid(2021, 1);
        assert_eq!(grid[0][0], date(2021, 2, 1));
        assert_eq!(grid[5][6], date(2021, 3, 14));
    }

    #[test]
    fn test_month_index_overflows_into_adjacent_years() {
        assert_eq!(CalendarMonth::new(2024, -1), CalendarMonth::new(2023, 11));
        assert_eq!(CalendarMonth::new(2024, 12), CalendarMonth::new(2025, 0));
        assert_eq!(month_grid(2024, 12), month_grid(2025, 0));
        assert_eq!(CalendarMonth::new(2024, -13), CalendarMonth::new(2022, 11));
    }

    #[test]
    fn test_navigation_returns_new_months() {
        let jan = CalendarMonth::new(2024, 0);
        assert_eq!(jan.prev(), CalendarMonth::new(2023, 11));
        assert_eq!(jan.next().month(), 2);
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(jan.title(), "January 2024");
    }

    #[test]
    fn test_grid_is_deterministic() {
        assert_eq!(month_grid(2000, 1), month_grid(2000, 1));
    }

    #[test]
    fn test_day_key_format() {
        assert_eq!(day_key(date(2020, 9, 8)), "2020-09-08");
    }
}
