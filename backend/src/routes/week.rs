use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Week view types
// =========================================================

/// One day of one shift row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekCell {
    pub date: NaiveDate,
    pub label: String,
    pub weekday: String,
    /// Worker names across all sectors, in sector order.
    pub workers: Vec<String>,
    /// Set when there is nobody to list, whether the shift is missing or unstaffed.
    pub no_shift: bool,
}

/// A shift name + window row spanning the seven weekdays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekShiftRow {
    pub shift_name: String,
    pub window: String,
    pub days: Vec<WeekCell>,
}

/// Week roster dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekViewData {
    pub iso_year: i32,
    pub week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub title: String,
    pub weekday_headers: Vec<String>,
    pub rows: Vec<WeekShiftRow>,
}

/// Placeholder text for a cell without workers.
pub const NO_SHIFT_LABEL: &str = "Keine Schicht";

/// Route function name constant for the week view
pub const GET_WEEK_VIEW: &str = "get_week_view";
