//! Error types for rule payload decoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    /// The payload was not valid JSON or did not match the wire shape.
    #[error("malformed rule payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The `period` field carried a code other than 0 (day), 1 (week), 2 (month).
    #[error("unknown period code: {0}")]
    UnknownPeriod(i64),

    /// A `weekdays` entry fell outside the wire range 1 (Sunday) ..= 7 (Saturday).
    #[error("weekday value out of range (expected 1..=7): {0}")]
    WeekdayOutOfRange(i64),

    /// The `index` field fell outside 1..=31.
    #[error("month day index out of range (expected 1..=31): {0}")]
    MonthDayOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, RuleError>;
