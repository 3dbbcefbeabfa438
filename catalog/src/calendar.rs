//! Month grid for the single-date picker.

use jiff::ToSpan;
use jiff::civil::Date;

/// Column headings, weeks starting on Sunday.
pub const WEEKDAY_HEADINGS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The month currently shown by a calendar, held as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor(Date);

impl MonthCursor {
    pub fn containing(date: Date) -> Self {
        Self(date.first_of_month())
    }

    pub fn first_day(&self) -> Date {
        self.0
    }

    /// Stays put at the edge of the supported date range.
    pub fn next(self) -> Self {
        self.0.checked_add(1.month()).map(Self).unwrap_or(self)
    }

    pub fn prev(self) -> Self {
        self.0.checked_sub(1.month()).map(Self).unwrap_or(self)
    }

    /// e.g. "January 2024"
    pub fn label(&self) -> String {
        self.0.strftime("%B %Y").to_string()
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.0.year() && date.month() == self.0.month()
    }

    /// Cells of the month laid out in Sunday-first weeks. `None` cells pad
    /// the first and last week; the length is always a multiple of seven.
    pub fn grid(&self) -> Vec<Option<Date>> {
        let leading = self.0.weekday().to_sunday_zero_offset() as usize;
        let days = self.0.days_in_month() as usize;

        let mut cells = vec![None; leading];
        cells.extend(self.0.series(1.day()).take(days).map(Some));
        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(std::iter::repeat_n(None, trailing));
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_grid_layout() {
        // January 2024 starts on a Monday and has 31 days.
        let grid = MonthCursor::containing(date(2024, 1, 20)).grid();
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0], None);
        assert_eq!(grid[1], Some(date(2024, 1, 1)));
        assert_eq!(grid[31], Some(date(2024, 1, 31)));
        assert_eq!(grid[32..], [None::<jiff::civil::Date>; 3]);
    }

    #[test]
    fn test_grid_without_padding() {
        // February 2015 starts on a Sunday and has exactly four weeks.
        let grid = MonthCursor::containing(date(2015, 2, 1)).grid();
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(Option::is_some));
    }

    #[test]
    fn test_grid_is_whole_weeks() {
        let mut cursor = MonthCursor::containing(date(2024, 1, 1));
        for _ in 0..24 {
            let grid = cursor.grid();
            assert_eq!(grid.len() % 7, 0, "{}", cursor.label());
            let days = grid.iter().flatten().count();
            assert_eq!(days, cursor.first_day().days_in_month() as usize);
            cursor = cursor.next();
        }
    }

    #[test]
    fn test_navigation() {
        let cursor = MonthCursor::containing(date(2024, 12, 31));
        assert_eq!(cursor.first_day(), date(2024, 12, 1));
        assert_eq!(cursor.label(), "December 2024");
        assert_eq!(cursor.next().first_day(), date(2025, 1, 1));
        assert_eq!(cursor.next().prev(), cursor);
        assert_eq!(cursor.prev().label(), "November 2024");
        assert!(cursor.contains(date(2024, 12, 15)));
        assert!(!cursor.contains(date(2025, 12, 15)));
    }
}
