//! Unit vectors for the calendar primitives: stepping, week windows,
//! weekday matching, and the end-of-month clamp.

use cadence_core::date_math::{
    days_in_month, matching_weekdays, resolve_month_day, step_date, week_window,
};
use cadence_core::{DateWindow, Period};
use chrono::{NaiveDate, Weekday};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

// ---------------------------------------------------------------------------
// step_date
// ---------------------------------------------------------------------------

#[test]
fn step_day_adds_days() {
    assert_eq!(step_date(d(2024, 1, 1), Period::Day, 1), Some(d(2024, 1, 2)));
    assert_eq!(step_date(d(2024, 1, 1), Period::Day, 5), Some(d(2024, 1, 6)));
}

#[test]
fn step_day_crosses_year_boundary() {
    assert_eq!(
        step_date(d(2023, 12, 30), Period::Day, 3),
        Some(d(2024, 1, 2))
    );
}

#[test]
fn step_week_adds_seven_days_per_count() {
    assert_eq!(step_date(d(2024, 1, 1), Period::Week, 1), Some(d(2024, 1, 8)));
    assert_eq!(
        step_date(d(2024, 1, 1), Period::Week, 2),
        Some(d(2024, 1, 15))
    );
}

#[test]
fn step_month_uses_calendar_arithmetic() {
    assert_eq!(
        step_date(d(2024, 1, 15), Period::Month, 1),
        Some(d(2024, 2, 15))
    );
    assert_eq!(
        step_date(d(2024, 11, 15), Period::Month, 3),
        Some(d(2025, 2, 15))
    );
}

#[test]
fn step_month_clamps_short_target_month() {
    // chrono's month arithmetic clamps Jan 31 + 1 month into February.
    // The engine avoids relying on this by stepping from the first of the
    // month, but the primitive's behavior is still pinned down here.
    assert_eq!(
        step_date(d(2024, 1, 31), Period::Month, 1),
        Some(d(2024, 2, 29))
    );
}

#[test]
fn step_beyond_representable_range_is_none() {
    assert_eq!(step_date(NaiveDate::MAX, Period::Day, 1), None);
    assert_eq!(step_date(NaiveDate::MAX, Period::Month, 1), None);
}

// ---------------------------------------------------------------------------
// week_window
// ---------------------------------------------------------------------------

#[test]
fn week_window_monday_start() {
    // 2024-01-03 is a Wednesday; its Monday-start week is Jan 1..=Jan 7.
    let week = week_window(d(2024, 1, 3), Weekday::Mon).expect("in range");
    assert_eq!(week, DateWindow::new(d(2024, 1, 1), d(2024, 1, 7)));
}

#[test]
fn week_window_of_the_start_day_itself() {
    let week = week_window(d(2024, 1, 1), Weekday::Mon).expect("in range");
    assert_eq!(week.start, d(2024, 1, 1));
    assert_eq!(week.end, d(2024, 1, 7));
}

#[test]
fn week_window_sunday_start() {
    // Sunday-start week containing Wed Jan 3 runs Dec 31 2023 ..= Jan 6 2024.
    let week = week_window(d(2024, 1, 3), Weekday::Sun).expect("in range");
    assert_eq!(week, DateWindow::new(d(2023, 12, 31), d(2024, 1, 6)));
}

#[test]
fn week_window_always_spans_seven_days() {
    let week = week_window(d(2024, 6, 14), Weekday::Mon).expect("in range");
    assert_eq!((week.end - week.start).num_days(), 6);
}

// ---------------------------------------------------------------------------
// matching_weekdays
// ---------------------------------------------------------------------------

#[test]
fn matching_weekdays_finds_members_in_ascending_order() {
    let window = DateWindow::new(d(2024, 1, 1), d(2024, 1, 14));
    let matches = matching_weekdays(window, &[Weekday::Mon, Weekday::Thu]);
    assert_eq!(
        matches,
        vec![d(2024, 1, 1), d(2024, 1, 4), d(2024, 1, 8), d(2024, 1, 11)]
    );
}

#[test]
fn matching_weekdays_empty_set_is_empty() {
    let window = DateWindow::new(d(2024, 1, 1), d(2024, 1, 31));
    assert!(matching_weekdays(window, &[]).is_empty());
}

#[test]
fn matching_weekdays_inverted_window_is_empty() {
    let window = DateWindow::new(d(2024, 1, 31), d(2024, 1, 1));
    assert!(matching_weekdays(window, &[Weekday::Mon]).is_empty());
}

// ---------------------------------------------------------------------------
// days_in_month / resolve_month_day
// ---------------------------------------------------------------------------

#[test]
fn days_in_month_vectors() {
    assert_eq!(days_in_month(d(2024, 1, 10)), Some(31));
    assert_eq!(days_in_month(d(2024, 4, 10)), Some(30));
    assert_eq!(days_in_month(d(2024, 2, 10)), Some(29)); // leap year
    assert_eq!(days_in_month(d(2023, 2, 10)), Some(28));
    assert_eq!(days_in_month(d(2024, 12, 10)), Some(31)); // year rollover path
}

#[test]
fn resolve_month_day_within_month_length() {
    assert_eq!(resolve_month_day(d(2024, 1, 1), 15), Some(d(2024, 1, 15)));
    assert_eq!(resolve_month_day(d(2024, 1, 20), 31), Some(d(2024, 1, 31)));
}

#[test]
fn resolve_month_day_clamps_to_last_day() {
    // Day 31 against shorter months clamps instead of spilling over.
    assert_eq!(resolve_month_day(d(2024, 4, 1), 31), Some(d(2024, 4, 30)));
    assert_eq!(resolve_month_day(d(2024, 2, 1), 31), Some(d(2024, 2, 29)));
    assert_eq!(resolve_month_day(d(2023, 2, 1), 31), Some(d(2023, 2, 28)));
    assert_eq!(resolve_month_day(d(2023, 2, 1), 30), Some(d(2023, 2, 28)));
}

#[test]
fn resolve_month_day_ignores_the_anchor_day() {
    // Only the month of the anchor matters, not which day it falls on.
    assert_eq!(resolve_month_day(d(2024, 3, 27), 5), Some(d(2024, 3, 5)));
}
