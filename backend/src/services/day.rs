//! Day projector: every shift of one date as a flat worker table.

use chrono::{Datelike, NaiveDate};

use super::filter::FilterState;
use super::ViewResult;
use crate::db::repository::ShiftRepository;
use crate::models::{format_full_date, weekday_long_de, Directory, ShiftRecord};
use crate::routes::day::{DayShiftTable, DayViewData, DayWorkerRow};

pub fn compute_day_table(shift: &ShiftRecord, directory: &Directory) -> DayShiftTable {
    DayShiftTable {
        shift_id: shift.id,
        shift_name: shift.name.clone(),
        window: shift.window.to_string(),
        lead: directory.lead_name(shift.lead),
        rows: shift
            .workers_with_sector()
            .map(|(sector, assignment)| DayWorkerRow {
                worker: directory.worker_name(assignment.worker),
                sector: directory.sector_name(sector),
                role: assignment.role.clone(),
            })
            .collect(),
    }
}

/// Tables for the shifts on `date`, in listing order. Shifts on other dates
/// are ignored.
pub fn compute_day_view(
    date: NaiveDate,
    shifts: &[ShiftRecord],
    directory: &Directory,
) -> DayViewData {
    let mut on_day: Vec<&ShiftRecord> = shifts.iter().filter(|s| s.date == date).collect();
    on_day.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    DayViewData {
        date,
        title: format!(
            "{}, {}",
            weekday_long_de(date.weekday()),
            format_full_date(date)
        ),
        shifts: on_day
            .into_iter()
            .map(|s| compute_day_table(s, directory))
            .collect(),
    }
}

/// Project the filter's selected date.
pub async fn get_day_view<R: ShiftRepository + ?Sized>(
    repo: &R,
    filter: &FilterState,
) -> ViewResult<DayViewData> {
    let shifts = repo.query_shifts(&filter.day_query()).await?;
    let directory = repo.directory().await?;
    Ok(compute_day_view(filter.date, &shifts, &directory))
}
