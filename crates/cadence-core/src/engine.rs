//! The generator -- turns a rule plus a bounded window into concrete dates.
//!
//! [`generate`] is a pure function: no I/O, no shared state, freshly
//! allocated output. It is safe to call concurrently and identical inputs
//! always produce identical output.

use chrono::{Datelike, NaiveDate};

use crate::date_math::{self, CalendarConfig, DateWindow, Period};
use crate::rule::{Pattern, RecurrenceRule};

/// Expand `rule` into every concrete date it denotes inside `window`,
/// optionally intersected with a second `filter` window.
///
/// The result is strictly ascending with no duplicates, and every date lies
/// within `window` (and within `filter` when one is supplied). An empty or
/// inverted window yields an empty result.
///
/// Termination is structural: the cursor advances by at least one full
/// period per iteration against a finite window, so the loop runs at most
/// `(window.end - window.start) / frequency` times. Should calendar
/// arithmetic ever fail to produce a next date (possible only at the far
/// edge of chrono's representable range), generation stops and the dates
/// collected so far are returned -- an invariant safeguard, not the
/// termination mechanism.
pub fn generate(
    rule: &RecurrenceRule,
    window: DateWindow,
    filter: Option<DateWindow>,
    config: &CalendarConfig,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    if window.is_empty() {
        return dates;
    }

    let admit =
        |date: NaiveDate| window.contains(date) && filter.map_or(true, |f| f.contains(date));

    match rule.pattern() {
        Pattern::Daily => {
            let mut cursor = window.start;
            while cursor <= window.end {
                if admit(cursor) {
                    dates.push(cursor);
                }
                match date_math::step_date(cursor, Period::Day, rule.frequency()) {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }
        Pattern::Weekly { weekdays } => {
            let mut cursor = window.start;
            loop {
                let Some(week) = date_math::week_window(cursor, config.week_start) else {
                    break;
                };
                if week.start > window.end {
                    break;
                }
                for date in date_math::matching_weekdays(week, weekdays) {
                    if admit(date) {
                        dates.push(date);
                    }
                }
                match date_math::step_date(cursor, Period::Week, rule.frequency()) {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }
        Pattern::Monthly { .. } => {
            let target = rule.month_day().unwrap_or_else(|| window.start.day());
            // Keep the cursor on the first of the month: month stepping then
            // never hits chrono's short-month day clamp, and the target day
            // is re-resolved against each month instead.
            let Some(mut cursor) = date_math::resolve_month_day(window.start, 1) else {
                return dates;
            };
            while cursor <= window.end {
                match date_math::resolve_month_day(cursor, target) {
                    Some(date) => {
                        if admit(date) {
                            dates.push(date);
                        }
                    }
                    None => break,
                }
                match date_math::step_date(cursor, Period::Month, rule.frequency()) {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }
    }

    dates
}
