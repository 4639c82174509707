//! Experience-duration engine.
//!
//! Everything below `core` is pure: no clock, no I/O, no shared state. The
//! evaluation instant is always passed in by the caller.

pub mod calculator;
pub mod report;
pub mod validate;

pub use calculator::label::{LESS_THAN_A_MONTH, format_duration, format_duration_i64};
pub use calculator::months::{months_between, months_between_dates};
pub use calculator::total::{total_experience, total_months};
pub use report::{ExperienceReport, PeriodSummary, build_report, summarize};
pub use validate::{PeriodIssue, validate_history, validate_period};
