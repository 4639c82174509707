use crate::models::{DurationMonths, EndDate, EvaluationInstant};
use chrono::{Datelike, NaiveDate};

/// Whole months from `start` to `end`, with `Ongoing` resolved against `at`.
pub fn months_between(start: NaiveDate, end: EndDate, at: EvaluationInstant) -> DurationMonths {
    months_between_dates(start, end.resolve(at))
}

/// Whole months from `start` to `end`.
///
/// A month only counts once its day-of-month has been reached again:
/// 2024-10-22 → 2025-10-18 is 11 months, not 12.
///
/// An inverted range (`start > end`, compared on the full date) yields 0.
/// Callers that need to detect it use `validate_period`.
pub fn months_between_dates(start: NaiveDate, end: NaiveDate) -> DurationMonths {
    if start > end {
        return DurationMonths::ZERO;
    }

    let mut months = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);

    if end.day() < start.day() && months > 0 {
        months -= 1;
    }

    // start <= end keeps this non-negative
    DurationMonths::new(u64::try_from(months).unwrap_or(0))
}
