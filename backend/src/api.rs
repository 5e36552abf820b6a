//! Public API surface for the shift board.
//!
//! This file consolidates the view types returned by the HTTP API and the
//! identifiers they carry. All types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::models::{EquipmentId, LeadId, SectorId, ShiftId, WorkerId};
pub use crate::models::{Sector, ShiftLead, ShiftRecord, ShiftType, TaskStatus};

pub use crate::routes::day::DayShiftTable;
pub use crate::routes::day::DayViewData;
pub use crate::routes::day::DayWorkerRow;
pub use crate::routes::filter::FilterOption;
pub use crate::routes::filter::FilterOptions;
pub use crate::routes::integrity::IntegrityIssue;
pub use crate::routes::integrity::IntegrityReport;
pub use crate::routes::integrity::IssueKind;
pub use crate::routes::month::MonthDayCell;
pub use crate::routes::month::MonthViewData;
pub use crate::routes::month::MonthWeekRow;
pub use crate::routes::month::ShiftSummary;
pub use crate::routes::navigation::NavEntry;
pub use crate::routes::shift_detail::EquipmentRow;
pub use crate::routes::shift_detail::SectorPanel;
pub use crate::routes::shift_detail::ShiftDetailPage;
pub use crate::routes::shift_detail::ShiftDetailView;
pub use crate::routes::shift_detail::ShiftHeader;
pub use crate::routes::shift_detail::TaskRow;
pub use crate::routes::shift_detail::WorkerCard;
pub use crate::routes::week::WeekCell;
pub use crate::routes::week::WeekShiftRow;
pub use crate::routes::week::WeekViewData;

pub use crate::services::{FilterContext, FilterState, Selection};
