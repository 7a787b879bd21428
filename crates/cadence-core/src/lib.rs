//! # cadence-core
//!
//! Deterministic recurrence rule expansion over bounded date windows.
//!
//! A [`RecurrenceRule`] describes an abstract periodic pattern -- "every N
//! days", "every 2 weeks on Monday and Thursday", "every month on the 31st"
//! -- and [`generate`] resolves it into the ordered, duplicate-free set of
//! concrete calendar dates the pattern denotes inside a finite window. All
//! arithmetic is day-granularity `chrono::NaiveDate`; there is no time zone
//! handling and no unbounded generation.
//!
//! ## Quick start
//!
//! ```rust
//! use cadence_core::{generate, CalendarConfig, DateWindow, RecurrenceRule};
//! use chrono::{NaiveDate, Weekday};
//!
//! let rule = RecurrenceRule::weekly(1, &[Weekday::Mon]);
//! let window = DateWindow::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
//! );
//! let dates = generate(&rule, window, None, &CalendarConfig::default());
//! assert_eq!(
//!     dates,
//!     vec![
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`rule`] — the immutable rule value and its persisted JSON codec
//! - [`date_math`] — pure calendar primitives (stepping, week windows,
//!   weekday matching, end-of-month clamping)
//! - [`engine`] — the generator
//! - [`error`] — decode error types

pub mod date_math;
pub mod engine;
pub mod error;
pub mod rule;

pub use date_math::{CalendarConfig, DateWindow, Period};
pub use engine::generate;
pub use error::RuleError;
pub use rule::{Pattern, RecurrenceRule};
