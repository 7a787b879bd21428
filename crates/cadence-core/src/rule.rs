//! The recurrence rule value type and its persisted wire codec.
//!
//! A [`RecurrenceRule`] is an immutable description of a periodic pattern:
//! "every N days", "every N weeks on these weekdays", "every N months on
//! day D". Rules are created once (from caller fields or a persisted JSON
//! payload) and never mutated; the engine in [`crate::engine`] turns them
//! into concrete dates.
//!
//! ## Wire format
//!
//! The persisted payload is a small JSON object with fixed field names:
//!
//! ```json
//! {"frequency":2,"period":1,"weekdays":[2,5]}
//! ```
//!
//! `period` is an integer code (0 = day, 1 = week, 2 = month). Weekday wire
//! values use the legacy mapping **Sunday = 1, Monday..Saturday = 2..7** --
//! irregular, but preserved exactly for storage compatibility. Internally
//! weekdays live as `chrono::Weekday` and sort in canonical week order
//! (Monday first, Sunday *last*); the wire mapping and the canonical
//! ordering are deliberately two separate concerns.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::date_math::{self, Period};
use crate::error::{Result, RuleError};

/// The shape of a rule's cadence, tagged with the data that only makes
/// sense for that shape. Matching is exhaustive everywhere so a new variant
/// cannot silently fall through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Every N days.
    Daily,
    /// Every N weeks, on the given weekdays. An empty set is a valid value
    /// that simply yields no dates -- not an error.
    Weekly { weekdays: Vec<Weekday> },
    /// Every N months, on `day_index` (1..=31). `None` falls back to the
    /// day-of-month of the generation window's start date.
    Monthly { day_index: Option<u32> },
}

impl Pattern {
    /// The plain cadence unit this pattern steps by.
    pub fn period(&self) -> Period {
        match self {
            Pattern::Daily => Period::Day,
            Pattern::Weekly { .. } => Period::Week,
            Pattern::Monthly { .. } => Period::Month,
        }
    }
}

/// An immutable recurrence rule: a frequency multiplier plus a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    frequency: u32,
    pattern: Pattern,
}

// Wire codes for the `period` field.
const PERIOD_DAY: i64 = 0;
const PERIOD_WEEK: i64 = 1;
const PERIOD_MONTH: i64 = 2;

/// The persisted JSON shape. Optional fields are omitted when absent.
#[derive(Serialize, Deserialize)]
struct WireRule {
    frequency: i64,
    period: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weekdays: Option<Vec<i64>>,
}

impl RecurrenceRule {
    /// Build a rule from explicit fields, normalizing as it goes:
    /// frequency is clamped to a minimum of 1 (a non-advancing rule cannot
    /// make progress, so it is not representable), weekdays are deduplicated
    /// and sorted in canonical week order, and a monthly day index is
    /// clamped into 1..=31.
    pub fn new(frequency: u32, pattern: Pattern) -> Self {
        let pattern = match pattern {
            Pattern::Daily => Pattern::Daily,
            Pattern::Weekly { weekdays } => Pattern::Weekly {
                weekdays: normalize_weekdays(weekdays),
            },
            Pattern::Monthly { day_index } => Pattern::Monthly {
                day_index: day_index.map(|index| index.clamp(1, 31)),
            },
        };
        Self {
            frequency: frequency.max(1),
            pattern,
        }
    }

    /// Every `frequency` days.
    pub fn daily(frequency: u32) -> Self {
        Self::new(frequency, Pattern::Daily)
    }

    /// Every `frequency` weeks on `weekdays`.
    pub fn weekly(frequency: u32, weekdays: &[Weekday]) -> Self {
        Self::new(
            frequency,
            Pattern::Weekly {
                weekdays: weekdays.to_vec(),
            },
        )
    }

    /// Every `frequency` months on `day_index` (or the window start's day
    /// when `None`).
    pub fn monthly(frequency: u32, day_index: Option<u32>) -> Self {
        Self::new(frequency, Pattern::Monthly { day_index })
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn period(&self) -> Period {
        self.pattern.period()
    }

    /// The rule's weekdays in canonical week order (Monday first, Sunday
    /// last). Empty for daily and monthly rules.
    pub fn weekdays(&self) -> &[Weekday] {
        match &self.pattern {
            Pattern::Weekly { weekdays } => weekdays,
            Pattern::Daily | Pattern::Monthly { .. } => &[],
        }
    }

    /// The monthly day index, when one was set.
    pub fn month_day(&self) -> Option<u32> {
        match &self.pattern {
            Pattern::Monthly { day_index } => *day_index,
            Pattern::Daily | Pattern::Weekly { .. } => None,
        }
    }

    /// The concrete day a monthly rule targets in the month containing
    /// `anchor`, with end-of-month clamping applied. Lets a display
    /// formatter show "on the 29th" without re-deriving recurrence logic.
    /// `None` for daily and weekly rules.
    pub fn resolved_month_day(&self, anchor: NaiveDate) -> Option<NaiveDate> {
        match &self.pattern {
            Pattern::Monthly { day_index } => {
                date_math::resolve_month_day(anchor, day_index.unwrap_or_else(|| anchor.day()))
            }
            Pattern::Daily | Pattern::Weekly { .. } => None,
        }
    }

    /// Encode to the persisted JSON payload. Weekdays are emitted in
    /// canonical iteration order as wire integers.
    pub fn encode(&self) -> String {
        let wire = match &self.pattern {
            Pattern::Daily => WireRule {
                frequency: i64::from(self.frequency),
                period: PERIOD_DAY,
                index: None,
                weekdays: None,
            },
            Pattern::Weekly { weekdays } => WireRule {
                frequency: i64::from(self.frequency),
                period: PERIOD_WEEK,
                index: None,
                weekdays: Some(weekdays.iter().map(|day| weekday_to_wire(*day)).collect()),
            },
            Pattern::Monthly { day_index } => WireRule {
                frequency: i64::from(self.frequency),
                period: PERIOD_MONTH,
                index: day_index.map(i64::from),
                weekdays: None,
            },
        };
        // A struct of plain integers cannot fail to serialize.
        serde_json::to_string(&wire).unwrap_or_default()
    }

    /// Decode a persisted payload, or `None` when it is malformed.
    ///
    /// Absence is the contract for bad payloads -- the caller substitutes a
    /// default rule. Use [`RecurrenceRule::try_decode`] to see the cause.
    pub fn decode(payload: &str) -> Option<Self> {
        Self::try_decode(payload).ok()
    }

    /// Decode a persisted payload, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Payload`] for malformed JSON,
    /// [`RuleError::UnknownPeriod`] for a period code outside 0..=2,
    /// [`RuleError::WeekdayOutOfRange`] for a weekday outside 1..=7, and
    /// [`RuleError::MonthDayOutOfRange`] for an index outside 1..=31.
    pub fn try_decode(payload: &str) -> Result<Self> {
        let wire: WireRule = serde_json::from_str(payload)?;

        let pattern = match wire.period {
            PERIOD_DAY => Pattern::Daily,
            PERIOD_WEEK => {
                let weekdays = wire
                    .weekdays
                    .unwrap_or_default()
                    .into_iter()
                    .map(weekday_from_wire)
                    .collect::<Result<Vec<_>>>()?;
                Pattern::Weekly { weekdays }
            }
            PERIOD_MONTH => {
                let day_index = match wire.index {
                    None => None,
                    Some(index) if (1..=31).contains(&index) => Some(index as u32),
                    Some(index) => return Err(RuleError::MonthDayOutOfRange(index)),
                };
                Pattern::Monthly { day_index }
            }
            other => return Err(RuleError::UnknownPeriod(other)),
        };

        // Frequency below 1 cannot advance; clamp rather than reject so a
        // structurally well-formed payload always decodes.
        let frequency = wire.frequency.clamp(1, i64::from(u32::MAX)) as u32;
        Ok(Self::new(frequency, pattern))
    }
}

/// Canonical week order: Monday first, Sunday last.
fn normalize_weekdays(mut weekdays: Vec<Weekday>) -> Vec<Weekday> {
    weekdays.sort_by_key(|day| day.num_days_from_monday());
    weekdays.dedup();
    weekdays
}

/// Weekday → wire integer: Sunday = 1, Monday..Saturday = 2..7.
fn weekday_to_wire(day: Weekday) -> i64 {
    i64::from(day.num_days_from_sunday()) + 1
}

/// Wire integer → weekday, rejecting values outside 1..=7.
fn weekday_from_wire(value: i64) -> Result<Weekday> {
    match value {
        1 => Ok(Weekday::Sun),
        2 => Ok(Weekday::Mon),
        3 => Ok(Weekday::Tue),
        4 => Ok(Weekday::Wed),
        5 => Ok(Weekday::Thu),
        6 => Ok(Weekday::Fri),
        7 => Ok(Weekday::Sat),
        other => Err(RuleError::WeekdayOutOfRange(other)),
    }
}
