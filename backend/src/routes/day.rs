use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ShiftId;

// =========================================================
// Day view types
// =========================================================

/// One table row: a worker with the sector and role they are staffed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWorkerRow {
    pub worker: String,
    pub sector: String,
    pub role: String,
}

/// One shift of the day with its flattened staffing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayShiftTable {
    pub shift_id: ShiftId,
    pub shift_name: String,
    pub window: String,
    pub lead: String,
    pub rows: Vec<DayWorkerRow>,
}

/// Day breakdown dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayViewData {
    pub date: NaiveDate,
    /// e.g. `Donnerstag, 01.05.2025`
    pub title: String,
    pub shifts: Vec<DayShiftTable>,
}

/// Route function name constant for the day view
pub const GET_DAY_VIEW: &str = "get_day_view";
