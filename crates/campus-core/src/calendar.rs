//! Month Grid
//!
//! Sunday-first month layout for the calendar widget.

use chrono::{Datelike, Months, NaiveDate};

/// Weekday column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The month currently displayed by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Cursor on the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self.first.checked_sub_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.first.checked_add_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    /// "April 2025"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }

    /// Cells of the month, row-major in weeks of seven. Leading and trailing
    /// cells outside the month are `None`.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        cells.extend(
            self.first
                .iter_days()
                .take_while(|day| self.contains(*day))
                .map(Some),
        );
        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(std::iter::repeat(None).take(trailing));
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_april_2025() {
        let cursor = MonthCursor::containing(date(2025, 4, 17));
        let grid = cursor.grid();

        // April 1st 2025 is a Tuesday
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0], None);
        assert_eq!(grid[1], None);
        assert_eq!(grid[2], Some(date(2025, 4, 1)));
        assert_eq!(grid[31], Some(date(2025, 4, 30)));
        assert!(grid[32..].iter().all(Option::is_none));
        assert_eq!(grid.iter().flatten().count(), 30);
    }

    #[test]
    fn test_grid_month_starting_sunday() {
        // June 1st 2025 is a Sunday
        let grid = MonthCursor::containing(date(2025, 6, 1)).grid();
        assert_eq!(grid[0], Some(date(2025, 6, 1)));
        assert_eq!(grid.len() % 7, 0);
    }

    #[test]
    fn test_navigation_crosses_year() {
        let january = MonthCursor::containing(date(2025, 1, 31));
        assert_eq!(january.previous().first_day(), date(2024, 12, 1));
        assert_eq!(january.previous().next(), january);
        assert_eq!(january.title(), "January 2025");
    }

    #[test]
    fn test_leap_february() {
        let grid = MonthCursor::containing(date(2024, 2, 10)).grid();
        assert_eq!(grid.iter().flatten().count(), 29);
    }
}
