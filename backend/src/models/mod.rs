//! Domain models for the shift plan.
//!
//! All entities are immutable once loaded. Cross references between entities
//! use the typed identifiers defined here and are resolved through the
//! [`Directory`] lookup tables.

#[macro_use]
pub mod macros;

pub mod plan;
pub mod shift;
pub mod time;

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;

define_id_type!(i64, ShiftId);
define_id_type!(i64, LeadId);
define_id_type!(i64, SectorId);
define_id_type!(i64, WorkerId);
define_id_type!(i64, EquipmentId);

pub use plan::{Directory, Sector, ShiftLead, ShiftPlan, Worker};
pub use shift::{
    EquipmentAssignment, SectorAssignment, ShiftRecord, ShiftType, TaskItem, TaskStatus,
    WorkerAssignment,
};
pub use time::{
    format_day_month, format_full_date, month_name_de, weekday_long_de, weekday_short_de,
    TimeWindow,
};
