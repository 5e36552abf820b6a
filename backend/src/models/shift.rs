//! Shift records and their nested sector, task, worker and equipment assignments.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::TimeWindow;
use super::{EquipmentId, LeadId, SectorId, ShiftId, WorkerId};

/// Progress of a task within a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Planned,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Label shown on the task badge.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "Geplant",
            TaskStatus::InProgress => "In Bearbeitung",
            TaskStatus::Done => "Erledigt",
        }
    }

    /// Planned tasks get the outlined badge, everything else the filled one.
    pub fn is_planned(&self) -> bool {
        matches!(self, TaskStatus::Planned)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit of work within a sector, identified by a short code such as `N1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub code: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee: WorkerId,
}

/// One worker staffed in one sector of one shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerAssignment {
    pub worker: WorkerId,
    /// Free-text job title, e.g. `Kranführer`.
    pub role: String,
    /// Hours worked; a finite, non-negative number.
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkerAssignment {
    pub fn has_valid_hours(&self) -> bool {
        self.hours.is_finite() && self.hours >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAssignment {
    pub sector: SectorId,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    #[serde(default)]
    pub workers: Vec<WorkerAssignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentAssignment {
    pub id: EquipmentId,
    pub name: String,
    /// Inventory code, e.g. `B-123`.
    pub code: String,
    pub sector: SectorId,
}

/// A staffed shift on one date. `(date, name)` is unique within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub id: ShiftId,
    pub date: NaiveDate,
    pub name: String,
    pub window: TimeWindow,
    pub lead: LeadId,
    #[serde(default)]
    pub sectors: Vec<SectorAssignment>,
    #[serde(default)]
    pub equipment: Vec<EquipmentAssignment>,
    #[serde(default)]
    pub notes: String,
}

impl ShiftRecord {
    /// Number of worker assignments across all sectors.
    pub fn worker_count(&self) -> usize {
        self.sectors.iter().map(|s| s.workers.len()).sum()
    }

    /// Worker assignments in sector order, each paired with its sector.
    pub fn workers_with_sector(&self) -> impl Iterator<Item = (SectorId, &WorkerAssignment)> {
        self.sectors
            .iter()
            .flat_map(|s| s.workers.iter().map(move |w| (s.sector, w)))
    }

    /// Tasks in sector order, each paired with its sector.
    pub fn tasks_with_sector(&self) -> impl Iterator<Item = (SectorId, &TaskItem)> {
        self.sectors
            .iter()
            .flat_map(|s| s.tasks.iter().map(move |t| (s.sector, t)))
    }

    /// Same `(date, name)` key, i.e. the same planned shift.
    pub fn is_same_shift(&self, other: &ShiftRecord) -> bool {
        self.date == other.date && self.name == other.name
    }

    pub fn shift_type(&self) -> ShiftType {
        ShiftType {
            name: self.name.clone(),
            window: self.window,
        }
    }

    /// Ordering used everywhere shifts are listed: date, window start, name.
    pub fn sort_key(&self) -> (NaiveDate, chrono::NaiveTime, &str) {
        (self.date, self.window.start, self.name.as_str())
    }
}

/// A distinct shift name with its time window, e.g. `Frühschicht (06:00 - 14:00)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftType {
    pub name: String,
    pub window: TimeWindow,
}

impl ShiftType {
    pub fn matches(&self, record: &ShiftRecord) -> bool {
        record.name == self.name && record.window == self.window
    }
}
