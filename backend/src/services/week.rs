//! Week projector: one row per shift type, one cell per weekday.

use chrono::Datelike;
use log::debug;

use super::calendar::{WeekWindow, WEEKDAYS};
use super::filter::FilterState;
use super::ViewResult;
use crate::db::repository::ShiftRepository;
use crate::models::{
    format_day_month, format_full_date, weekday_short_de, Directory, ShiftRecord, ShiftType,
};
use crate::routes::week::{WeekCell, WeekShiftRow, WeekViewData};

/// Rows are the catalog types followed by any type only seen in `shifts`.
fn row_types(catalog: &[ShiftType], shifts: &[ShiftRecord]) -> Vec<ShiftType> {
    let mut rows = catalog.to_vec();
    for shift in shifts {
        let shift_type = shift.shift_type();
        if !rows.contains(&shift_type) {
            rows.push(shift_type);
        }
    }
    rows
}

/// Project `shifts` onto the seven days of `window`.
///
/// A missing shift and a shift without workers both produce an empty cell
/// flagged `no_shift`.
pub fn compute_week_view(
    window: &WeekWindow,
    catalog: &[ShiftType],
    shifts: &[ShiftRecord],
    directory: &Directory,
) -> WeekViewData {
    let in_week: Vec<ShiftRecord> = shifts
        .iter()
        .filter(|s| window.contains(s.date))
        .cloned()
        .collect();

    let rows = row_types(catalog, &in_week)
        .into_iter()
        .map(|shift_type| WeekShiftRow {
            days: window
                .days()
                .map(|date| {
                    let workers: Vec<String> = in_week
                        .iter()
                        .find(|s| s.date == date && shift_type.matches(s))
                        .map(|s| {
                            s.workers_with_sector()
                                .map(|(_, w)| directory.worker_name(w.worker))
                                .collect()
                        })
                        .unwrap_or_default();
                    WeekCell {
                        date,
                        label: format_day_month(date),
                        weekday: weekday_short_de(date.weekday()).to_string(),
                        no_shift: workers.is_empty(),
                        workers,
                    }
                })
                .collect(),
            window: shift_type.window.to_string(),
            shift_name: shift_type.name,
        })
        .collect();

    WeekViewData {
        iso_year: window.iso_year,
        week: window.week,
        start: window.start,
        end: window.end,
        title: format!(
            "KW {} ({} - {})",
            window.week,
            format_day_month(window.start),
            format_full_date(window.end)
        ),
        weekday_headers: WEEKDAYS
            .iter()
            .map(|d| weekday_short_de(*d).to_string())
            .collect(),
        rows,
    }
}

/// Fetch the ISO week under `filter` and project it.
pub async fn get_week_view<R: ShiftRepository + ?Sized>(
    repo: &R,
    iso_year: i32,
    week: u32,
    filter: &FilterState,
) -> ViewResult<WeekViewData> {
    let window = WeekWindow::new(iso_year, week)?;
    let shifts = repo
        .query_shifts(&filter.to_query(window.start, window.end))
        .await?;
    let catalog = repo.list_shift_types().await?;
    let directory = repo.directory().await?;
    debug!(
        "Week view {}-W{:02}: {} shifts, {} shift types",
        iso_year,
        week,
        shifts.len(),
        catalog.len()
    );
    Ok(compute_week_view(&window, &catalog, &shifts, &directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sample::{sample_plan, EARLY_SHIFT, LATE_SHIFT};
    use crate::models::{ShiftPlan, TimeWindow};

    fn week_18() -> (WeekViewData, ShiftPlan) {
        let plan = sample_plan();
        let view = compute_week_view(
            &WeekWindow::new(2025, 18).unwrap(),
            &plan.shift_types(),
            &plan.shifts,
            &plan.directory,
        );
        (view, plan)
    }

    #[test]
    fn test_week_18_title_and_rows() {
        let (view, _) = week_18();
        assert_eq!(view.title, "KW 18 (28.04 - 04.05.2025)");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].shift_name, EARLY_SHIFT);
        assert_eq!(view.rows[0].window, "06:00 - 14:00");
        assert_eq!(view.rows[1].shift_name, LATE_SHIFT);
        assert!(view.rows.iter().all(|r| r.days.len() == 7));
    }

    #[test]
    fn test_first_of_may_roster() {
        let (view, _) = week_18();
        let thursday = &view.rows[0].days[3];
        assert_eq!(thursday.label, "01.05");
        assert_eq!(
            thursday.workers,
            vec!["Lisa Schmidt", "Michael Weber", "Anna Becker", "Jan Hoffmann"]
        );
        assert!(!thursday.no_shift);
    }

    #[test]
    fn test_missing_and_empty_shift_look_alike() {
        let (view, plan) = week_18();
        // 28.04 has no shift record; 06.05 has an unstaffed early shift.
        let missing = &view.rows[0].days[0];
        let week_19 = compute_week_view(
            &WeekWindow::new(2025, 19).unwrap(),
            &plan.shift_types(),
            &plan.shifts,
            &plan.directory,
        );
        let unstaffed = &week_19.rows[0].days[1];
        assert_eq!(unstaffed.label, "06.05");
        assert!(missing.no_shift && missing.workers.is_empty());
        assert!(unstaffed.no_shift && unstaffed.workers.is_empty());
    }

    #[test]
    fn test_unlisted_shift_type_gets_a_row() {
        let mut plan = sample_plan();
        let mut night = plan.shifts[0].clone();
        night.name = "Nachtschicht".to_string();
        night.window = TimeWindow::from_hm((22, 0), (6, 0)).unwrap();
        let catalog = plan.shift_types();
        plan.shifts.push(night);

        let view = compute_week_view(
            &WeekWindow::new(2025, 18).unwrap(),
            &catalog,
            &plan.shifts,
            &plan.directory,
        );
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[2].shift_name, "Nachtschicht");
        assert_eq!(view.rows[2].days[3].workers.len(), 4);
    }

    #[test]
    fn test_empty_week_keeps_catalog_rows() {
        let plan = sample_plan();
        let view = compute_week_view(
            &WeekWindow::new(2025, 22).unwrap(),
            &plan.shift_types(),
            &plan.shifts,
            &plan.directory,
        );
        assert_eq!(view.rows.len(), 2);
        assert!(view.rows.iter().flat_map(|r| r.days.iter()).all(|c| c.no_shift));
    }
}
