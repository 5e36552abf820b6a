//! Month projector: a Monday-first grid of week rows with per-shift headcounts.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;

use super::calendar::{MonthWindow, WEEKDAYS};
use super::filter::FilterState;
use super::ViewResult;
use crate::db::repository::ShiftRepository;
use crate::models::{format_day_month, month_name_de, weekday_short_de, ShiftRecord};
use crate::routes::month::{MonthDayCell, MonthViewData, MonthWeekRow, ShiftSummary};

pub(crate) fn summarize(shift: &ShiftRecord) -> ShiftSummary {
    let worker_count = shift.worker_count();
    ShiftSummary {
        shift_name: shift.name.clone(),
        window: shift.window.to_string(),
        worker_count,
        is_unstaffed: worker_count == 0,
    }
}

/// Group shifts by date, each day ordered by window start then name.
pub(crate) fn by_date(shifts: &[ShiftRecord]) -> BTreeMap<NaiveDate, Vec<&ShiftRecord>> {
    let mut days: BTreeMap<NaiveDate, Vec<&ShiftRecord>> = BTreeMap::new();
    for shift in shifts {
        days.entry(shift.date).or_default().push(shift);
    }
    for day in days.values_mut() {
        day.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }
    days
}

/// Project `shifts` onto the grid of `window`.
///
/// Every grid day gets a cell, including the days borrowed from the adjacent
/// months. Shifts outside the grid are ignored.
pub fn compute_month_view(window: &MonthWindow, shifts: &[ShiftRecord]) -> MonthViewData {
    let days = by_date(shifts);

    let weeks = window
        .week_starts()
        .map(|monday| MonthWeekRow {
            week_number: monday.iso_week().week(),
            days: (0..7)
                .map(|offset| {
                    let date = monday + Duration::days(offset);
                    MonthDayCell {
                        date,
                        label: format_day_month(date),
                        weekday: weekday_short_de(date.weekday()).to_string(),
                        in_month: window.contains(date),
                        shifts: days
                            .get(&date)
                            .map(|list| list.iter().map(|s| summarize(s)).collect())
                            .unwrap_or_default(),
                    }
                })
                .collect(),
        })
        .collect();

    MonthViewData {
        year: window.year,
        month: window.month,
        title: format!(
            "{} {}",
            month_name_de(window.month).unwrap_or_default(),
            window.year
        ),
        weekday_headers: WEEKDAYS
            .iter()
            .map(|d| weekday_short_de(*d).to_string())
            .collect(),
        weeks,
    }
}

/// Fetch the grid range under `filter` and project it.
pub async fn get_month_view<R: ShiftRepository + ?Sized>(
    repo: &R,
    year: i32,
    month: u32,
    filter: &FilterState,
) -> ViewResult<MonthViewData> {
    let window = MonthWindow::new(year, month)?;
    let query = filter.to_query(window.grid_start(), window.grid_end());
    let shifts = repo.query_shifts(&query).await?;
    debug!(
        "Month view {}-{:02}: {} shifts in grid",
        year,
        month,
        shifts.len()
    );
    Ok(compute_month_view(&window, &shifts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sample::{sample_plan, EARLY_SHIFT, LATE_SHIFT};

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn may_view() -> MonthViewData {
        let window = MonthWindow::new(2025, 5).unwrap();
        compute_month_view(&window, &sample_plan().shifts)
    }

    fn cell(view: &MonthViewData, date: NaiveDate) -> &MonthDayCell {
        view.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .find(|c| c.date == date)
            .unwrap()
    }

    #[test]
    fn test_may_2025_layout() {
        let view = may_view();
        assert_eq!(view.title, "Mai 2025");
        assert_eq!(view.weekday_headers[0], "Mo");
        assert_eq!(view.weekday_headers[6], "So");
        let numbers: Vec<u32> = view.weeks.iter().map(|w| w.week_number).collect();
        assert_eq!(numbers, vec![18, 19, 20, 21, 22]);
        assert!(view.weeks.iter().all(|w| w.days.len() == 7));
        assert!(!view.weeks[0].days[0].in_month);
        assert_eq!(view.weeks[0].days[3].date, may(1));
    }

    #[test]
    fn test_first_of_may_counts() {
        let view = may_view();
        let first = cell(&view, may(1));
        assert_eq!(first.label, "01.05");
        assert_eq!(first.weekday, "Do");
        assert_eq!(first.shifts[0].shift_name, EARLY_SHIFT);
        assert_eq!(first.shifts[0].worker_count, 4);
        assert_eq!(first.shifts[1].shift_name, LATE_SHIFT);
        assert_eq!(first.shifts[1].worker_count, 3);
    }

    #[test]
    fn test_zero_staffing_differs_from_no_data() {
        let view = may_view();
        let idle = cell(&view, may(6));
        assert_eq!(idle.shifts.len(), 2);
        assert!(idle.shifts.iter().all(|s| s.is_unstaffed));

        let empty = cell(&view, may(20));
        assert!(!empty.has_shifts());
    }

    #[test]
    fn test_partially_staffed_day() {
        let view = may_view();
        let fifth = cell(&view, may(5));
        assert!(!fifth.shifts[0].is_unstaffed);
        assert!(fifth.shifts[1].is_unstaffed);
    }

    #[tokio::test]
    async fn test_invalid_month_is_rejected() {
        let repo = crate::db::LocalRepository::with_sample_data();
        let result = get_month_view(&repo, 2025, 13, &FilterState::new(may(1))).await;
        assert!(matches!(result, Err(super::super::ViewError::Calendar(_))));
    }

    #[tokio::test]
    async fn test_month_at_earliest_date_does_not_panic() {
        let repo = crate::db::LocalRepository::with_sample_data();
        let min = NaiveDate::MIN;
        let result = get_month_view(&repo, min.year(), min.month(), &FilterState::new(may(1))).await;
        if min.weekday() != chrono::Weekday::Mon {
            assert!(matches!(result, Err(super::super::ViewError::Calendar(_))));
        }
    }
}
