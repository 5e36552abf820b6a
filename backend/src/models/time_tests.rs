use chrono::{Duration, NaiveDate, Weekday};

use super::time::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_window_display() {
    let early = TimeWindow::from_hm((6, 0), (14, 0)).unwrap();
    assert_eq!(early.to_string(), "06:00 - 14:00");
}

#[test]
fn test_window_duration_same_day() {
    let late = TimeWindow::from_hm((14, 0), (22, 0)).unwrap();
    assert!(!late.crosses_midnight());
    assert_eq!(late.duration(), Duration::hours(8));
}

#[test]
fn test_window_duration_overnight() {
    let night = TimeWindow::from_hm((22, 0), (6, 0)).unwrap();
    assert!(night.crosses_midnight());
    assert_eq!(night.duration(), Duration::hours(8));
}

#[test]
fn test_from_hm_rejects_invalid() {
    assert!(TimeWindow::from_hm((25, 0), (6, 0)).is_none());
    assert!(TimeWindow::from_hm((6, 0), (6, 61)).is_none());
}

#[test]
fn test_adjacent_windows_do_not_overlap() {
    let early = TimeWindow::from_hm((6, 0), (14, 0)).unwrap();
    let late = TimeWindow::from_hm((14, 0), (22, 0)).unwrap();
    let d = date(2025, 5, 1);
    assert!(!early.overlaps_on(d, &late, d));
}

#[test]
fn test_night_overlaps_next_morning() {
    let night = TimeWindow::from_hm((22, 0), (7, 0)).unwrap();
    let early = TimeWindow::from_hm((6, 0), (14, 0)).unwrap();
    assert!(night.overlaps_on(date(2025, 5, 1), &early, date(2025, 5, 2)));
    assert!(!night.overlaps_on(date(2025, 5, 1), &early, date(2025, 5, 1)));
}

#[test]
fn test_weekday_labels() {
    assert_eq!(weekday_short_de(Weekday::Mon), "Mo");
    assert_eq!(weekday_short_de(Weekday::Sun), "So");
    assert_eq!(weekday_long_de(Weekday::Thu), "Donnerstag");
}

#[test]
fn test_month_names() {
    assert_eq!(month_name_de(5), Some("Mai"));
    assert_eq!(month_name_de(3), Some("März"));
    assert_eq!(month_name_de(0), None);
    assert_eq!(month_name_de(13), None);
}

#[test]
fn test_date_formats() {
    let d = date(2025, 5, 1);
    assert_eq!(format_day_month(d), "01.05");
    assert_eq!(format_full_date(d), "01.05.2025");
}
