//! Time-of-day windows and German calendar labels.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// A named shift's time-of-day window.
///
/// A window whose `end` is not after its `start` crosses midnight
/// (e.g. a night shift 22:00 - 06:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Build a window from whole hours and minutes, `None` if either is out of range.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0)?,
            end: NaiveTime::from_hms_opt(end.0, end.1, 0)?,
        })
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// Length of the window. A window with equal bounds spans a full day.
    pub fn duration(&self) -> Duration {
        let raw = self.end.signed_duration_since(self.start);
        if self.crosses_midnight() {
            raw + Duration::days(1)
        } else {
            raw
        }
    }

    /// Absolute `[start, end)` minute interval when the window begins on `date`.
    fn span_on(&self, date: NaiveDate) -> (i64, i64) {
        let day_minutes = i64::from(date.num_days_from_ce()) * 24 * 60;
        let start = day_minutes + i64::from(self.start.num_seconds_from_midnight() / 60);
        (start, start + self.duration().num_minutes())
    }

    /// Whether two windows starting on the given dates share any minute.
    pub fn overlaps_on(&self, date: NaiveDate, other: &TimeWindow, other_date: NaiveDate) -> bool {
        let (a_start, a_end) = self.span_on(date);
        let (b_start, b_end) = other.span_on(other_date);
        a_start < b_end && b_start < a_end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Two-letter weekday column header (`Mo` .. `So`).
pub fn weekday_short_de(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}

pub fn weekday_long_de(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

/// German month name for `month` in `1..=12`.
pub fn month_name_de(month: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ];
    month
        .checked_sub(1)
        .and_then(|idx| NAMES.get(idx as usize).copied())
}

/// `01.05`
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

/// `01.05.2025`
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
