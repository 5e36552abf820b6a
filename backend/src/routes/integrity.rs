use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ShiftId;

/// Kind of referential or staffing inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    UnknownAssignee,
    AssigneeNotInSector,
    UnknownEquipmentSector,
    UnknownSector,
    UnknownWorker,
    UnknownLead,
    DoubleBooking,
    DuplicateWorkerName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityIssue {
    pub kind: IssueKind,
    /// `None` for plan-wide issues such as duplicate names.
    pub shift_id: Option<ShiftId>,
    pub date: Option<NaiveDate>,
    pub shift_name: Option<String>,
    pub description: String,
}

/// Display-only inconsistencies found in the plan. Never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub total_shifts: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }
}

pub const GET_INTEGRITY_REPORT: &str = "get_integrity_report";
