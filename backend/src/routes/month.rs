use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Month view types
// =========================================================

/// One shift's headcount inside a month cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub shift_name: String,
    pub window: String,
    pub worker_count: usize,
    /// Zero-staffed shifts are still listed, only de-emphasized.
    pub is_unstaffed: bool,
}

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthDayCell {
    pub date: NaiveDate,
    pub label: String,
    pub weekday: String,
    /// False for the leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
    /// Empty when no shift exists on this date.
    pub shifts: Vec<ShiftSummary>,
}

impl MonthDayCell {
    pub fn has_shifts(&self) -> bool {
        !self.shifts.is_empty()
    }
}

/// One calendar week row (always seven days, Monday first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthWeekRow {
    pub week_number: u32,
    pub days: Vec<MonthDayCell>,
}

/// Month grid dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthViewData {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekday_headers: Vec<String>,
    pub weeks: Vec<MonthWeekRow>,
}

/// Route function name constant for the month view
pub const GET_MONTH_VIEW: &str = "get_month_view";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_without_shifts() {
        let cell = MonthDayCell {
            date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            label: "20.05".to_string(),
            weekday: "Di".to_string(),
            in_month: true,
            shifts: vec![],
        };
        assert!(!cell.has_shifts());
    }

    #[test]
    fn test_summary_serializes_flags() {
        let summary = ShiftSummary {
            shift_name: "Spätschicht".to_string(),
            window: "14:00 - 22:00".to_string(),
            worker_count: 0,
            is_unstaffed: true,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["worker_count"], 0);
        assert_eq!(json["is_unstaffed"], true);
    }
}
