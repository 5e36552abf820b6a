use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EquipmentId, SectorId, ShiftId, TaskStatus, WorkerId};

/// Header card: shift name, date, window and the responsible lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftHeader {
    pub shift_id: ShiftId,
    pub shift_name: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub window: String,
    pub lead_name: String,
    pub lead_contact: String,
    /// Avatar initials, e.g. `TM` for Thomas Müller.
    pub lead_initials: String,
    pub worker_count: usize,
    pub notes: String,
}

/// One task row. `sector` is the originating sector in the flat task tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub code: String,
    pub description: String,
    pub status: TaskStatus,
    pub status_label: String,
    pub assignee: WorkerId,
    pub assignee_name: String,
    pub sector: SectorId,
    pub sector_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerCard {
    pub worker: WorkerId,
    pub name: String,
    pub initials: String,
    pub role: String,
    pub hours: f64,
    pub notes: Option<String>,
    pub sector: SectorId,
    pub sector_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRow {
    pub id: EquipmentId,
    pub name: String,
    pub code: String,
    pub sector: SectorId,
    pub sector_name: String,
}

/// Sector tab: workers and tasks nested under their sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPanel {
    pub sector: SectorId,
    pub sector_name: String,
    pub tasks: Vec<TaskRow>,
    pub workers: Vec<WorkerCard>,
}

/// All four tabs of one shift, derived from the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDetailView {
    pub header: ShiftHeader,
    pub sectors: Vec<SectorPanel>,
    pub tasks: Vec<TaskRow>,
    pub workers: Vec<WorkerCard>,
    pub equipment: Vec<EquipmentRow>,
}

/// Shift detail page: either the shift or an explicit empty state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ShiftDetailPage {
    Found(Box<ShiftDetailView>),
    Missing {
        date: NaiveDate,
        shift_name: String,
        message: String,
    },
}

impl ShiftDetailPage {
    pub fn is_found(&self) -> bool {
        matches!(self, ShiftDetailPage::Found(_))
    }
}

/// Route function name constant for the shift detail page
pub const GET_SHIFT_DETAIL: &str = "get_shift_detail";
