//! Calendar date primitives -- stepping, week windows, weekday matching,
//! and day-of-month resolution.
//!
//! Everything here is pure: plain `NaiveDate` in, plain `NaiveDate` out,
//! no ambient locale or "current calendar" state. The week-start convention
//! is always passed in explicitly (see [`CalendarConfig`]) so results are
//! reproducible in tests regardless of the host environment.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// The unit of recurrence cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

/// A closed, inclusive range of calendar dates.
///
/// Used both as the generation bound and as the optional secondary filter.
/// A window whose `start` is after its `end` is simply empty -- it contains
/// nothing and generates nothing. That is a valid value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when `date` lies within the window (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Explicitly injected calendar configuration.
///
/// Replaces any reliance on a process-wide locale: callers that care about a
/// different first weekday (e.g. Sunday-start regions) pass it here, and the
/// engine stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    /// First day of the week used for week bucketing.
    pub week_start: Weekday,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
        }
    }
}

/// Advance `date` by `count` periods.
///
/// - `Day` adds `count` days.
/// - `Week` adds `7 × count` days.
/// - `Month` uses calendar month arithmetic (`checked_add_months`), which
///   clamps the day when the target month is shorter. Callers that need a
///   specific day-of-month resolve it afterwards via [`resolve_month_day`];
///   the engine keeps its monthly cursor on the first of the month so the
///   clamp never drifts it.
///
/// Returns `None` only when the result would fall outside chrono's
/// representable date range.
pub fn step_date(date: NaiveDate, period: Period, count: u32) -> Option<NaiveDate> {
    match period {
        Period::Day => date.checked_add_days(Days::new(u64::from(count))),
        Period::Week => date.checked_add_days(Days::new(7 * u64::from(count))),
        Period::Month => date.checked_add_months(Months::new(count)),
    }
}

/// The inclusive 7-day window of the week containing `date`, for the given
/// first weekday.
pub fn week_window(date: NaiveDate, week_start: Weekday) -> Option<DateWindow> {
    let offset =
        (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    let start = date.checked_sub_days(Days::new(u64::from(offset)))?;
    let end = start.checked_add_days(Days::new(6))?;
    Some(DateWindow::new(start, end))
}

/// Every date in `window` whose weekday is a member of `weekdays`, ascending,
/// no duplicates. An empty weekday slice yields an empty result.
pub fn matching_weekdays(window: DateWindow, weekdays: &[Weekday]) -> Vec<NaiveDate> {
    if window.is_empty() || weekdays.is_empty() {
        return Vec::new();
    }
    window
        .start
        .iter_days()
        .take_while(|date| *date <= window.end)
        .filter(|date| weekdays.contains(&date.weekday()))
        .collect()
}

/// Number of days in the calendar month containing `date`.
pub fn days_in_month(date: NaiveDate) -> Option<u32> {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year().checked_add(1)?, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_of_next.pred_opt()?.day())
}

/// The date for `day_index` within the calendar month containing `date`.
///
/// When `day_index` exceeds the month length, the result is **clamped to the
/// last day of that month** -- day 31 against April resolves to April 30,
/// against February to the 28th or 29th. It never overflows into the next
/// month. This clamp is the load-bearing edge case of the whole engine.
pub fn resolve_month_day(date: NaiveDate, day_index: u32) -> Option<NaiveDate> {
    let clamped = day_index.clamp(1, days_in_month(date)?);
    NaiveDate::from_ymd_opt(date.year(), date.month(), clamped)
}
