//! Calendar windows for the month and week views.
//!
//! Weeks start on Monday. Week numbers are ISO 8601 week numbers.

use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Requested calendar window does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid month {month} in year {year}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("ISO year {year} has no week {week}")]
    InvalidWeek { year: i32, week: u32 },
}

/// The seven weekdays in column order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Monday of the week containing `date`, or `None` before the first
/// representable Monday.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// Monday and Sunday of the week containing `date`.
fn week_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = week_start(date)?;
    let end = start.checked_add_days(Days::new(6))?;
    Some((start, end))
}

/// A calendar month laid out as full Monday-first weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    /// First day of the month.
    pub first: NaiveDate,
    /// Last day of the month.
    pub last: NaiveDate,
    grid_start: NaiveDate,
    grid_end: NaiveDate,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidMonth { year, month };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last = (28..=31)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(invalid)?;
        let (grid_start, _) = week_bounds(first).ok_or_else(invalid)?;
        let (_, grid_end) = week_bounds(last).ok_or_else(invalid)?;
        Ok(Self {
            year,
            month,
            first,
            last,
            grid_start,
            grid_end,
        })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month())
    }

    pub fn days_in_month(&self) -> u32 {
        self.last.day()
    }

    /// Monday on or before the first of the month.
    pub fn grid_start(&self) -> NaiveDate {
        self.grid_start
    }

    /// Sunday on or after the last of the month.
    pub fn grid_end(&self) -> NaiveDate {
        self.grid_end
    }

    /// Number of week rows in the grid.
    pub fn week_count(&self) -> u32 {
        let offset = self.first.weekday().num_days_from_monday();
        (self.days_in_month() + offset).div_ceil(7)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Monday of each week row, in order.
    pub fn week_starts(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.grid_start();
        (0..self.week_count()).map(move |i| start + Duration::weeks(i64::from(i)))
    }
}

/// One ISO week, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub iso_year: i32,
    pub week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn new(iso_year: i32, week: u32) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidWeek {
            year: iso_year,
            week,
        };
        let start = NaiveDate::from_isoywd_opt(iso_year, week, Weekday::Mon).ok_or(invalid)?;
        let end = start.checked_add_days(Days::new(6)).ok_or(invalid)?;
        Ok(Self {
            iso_year,
            week,
            start,
            end,
        })
    }

    /// The ISO week containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        let iso = date.iso_week();
        let (start, end) = week_bounds(date).ok_or(CalendarError::InvalidWeek {
            year: iso.year(),
            week: iso.week(),
        })?;
        Ok(Self {
            iso_year: iso.year(),
            week: iso.week(),
            start,
            end,
        })
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..7).map(move |i| start + Duration::days(i))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_may_2025_grid() {
        let window = MonthWindow::new(2025, 5).unwrap();
        assert_eq!(window.days_in_month(), 31);
        assert_eq!(window.grid_start(), date(2025, 4, 28));
        assert_eq!(window.grid_end(), date(2025, 6, 1));
        assert_eq!(window.week_count(), 5);
    }

    #[test]
    fn test_month_starting_on_monday() {
        // September 2025 starts on a Monday and ends on a Tuesday.
        let window = MonthWindow::new(2025, 9).unwrap();
        assert_eq!(window.grid_start(), date(2025, 9, 1));
        assert_eq!(window.week_count(), 5);
    }

    #[test]
    fn test_february_spanning_four_rows() {
        // February 2021 starts on a Monday and has 28 days.
        let window = MonthWindow::new(2021, 2).unwrap();
        assert_eq!(window.week_count(), 4);
    }

    #[test]
    fn test_six_row_month() {
        // March 2025 starts on a Saturday and has 31 days.
        let window = MonthWindow::new(2025, 3).unwrap();
        assert_eq!(window.week_count(), 6);
    }

    #[test]
    fn test_december_rolls_over() {
        let window = MonthWindow::new(2025, 12).unwrap();
        assert_eq!(window.last, date(2025, 12, 31));
    }

    #[test]
    fn test_extreme_year_is_invalid_not_overflow() {
        assert!(MonthWindow::new(i32::MAX, 12).is_err());
        assert!(MonthWindow::new(i32::MIN, 1).is_err());
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            MonthWindow::new(2025, 13),
            Err(CalendarError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
        assert!(MonthWindow::new(2025, 0).is_err());
    }

    #[test]
    fn test_week_18_2025() {
        let window = WeekWindow::new(2025, 18).unwrap();
        assert_eq!(window.start, date(2025, 4, 28));
        assert_eq!(window.end, date(2025, 5, 4));
        assert_eq!(WeekWindow::containing(date(2025, 5, 1)), Ok(window));
    }

    #[test]
    fn test_week_containing_new_year() {
        // 2024-12-30 belongs to ISO week 1 of 2025.
        let window = WeekWindow::containing(date(2024, 12, 31)).unwrap();
        assert_eq!(window.iso_year, 2025);
        assert_eq!(window.week, 1);
    }

    #[test]
    fn test_invalid_week() {
        assert!(WeekWindow::new(2025, 53).is_err());
        assert!(WeekWindow::new(2026, 53).is_ok());
        assert!(WeekWindow::new(2025, 0).is_err());
    }

    #[test]
    fn test_month_grid_at_min_date() {
        let min = NaiveDate::MIN;
        // The first month only has a grid if it starts on a Monday.
        let result = MonthWindow::new(min.year(), min.month());
        assert_eq!(result.is_ok(), min.weekday() == Weekday::Mon);
        if result.is_err() {
            assert_eq!(
                result,
                Err(CalendarError::InvalidMonth {
                    year: min.year(),
                    month: min.month()
                })
            );
        }
        assert_eq!(MonthWindow::containing(min), result);
        assert!(MonthWindow::new(min.year(), min.month() + 1).is_ok());
    }

    #[test]
    fn test_month_grid_at_max_date() {
        let max = NaiveDate::MAX;
        let result = MonthWindow::new(max.year(), max.month());
        assert_eq!(result.is_ok(), max.weekday() == Weekday::Sun);
        assert!(MonthWindow::new(max.year(), max.month() - 1).is_ok());
    }

    #[test]
    fn test_week_at_date_bounds() {
        let min = NaiveDate::MIN;
        let max = NaiveDate::MAX;
        assert_eq!(week_start(min).is_some(), min.weekday() == Weekday::Mon);
        assert_eq!(
            WeekWindow::containing(min).is_ok(),
            min.weekday() == Weekday::Mon
        );
        assert_eq!(
            WeekWindow::containing(max).is_ok(),
            max.weekday() == Weekday::Sun
        );
    }
}
