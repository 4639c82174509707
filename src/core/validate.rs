use crate::errors::{AppError, AppResult};
use crate::models::{EndDate, EvaluationInstant, WorkPeriod};
use crate::utils::date::format_date;

/// A validation failure tied to the position of the entry in the history.
#[derive(Debug)]
pub struct PeriodIssue {
    pub index: usize,
    pub error: AppError,
}

/// Check the ordering of a single period.
///
/// The month computation itself tolerates bad ordering (it returns 0), so
/// this is the place where it gets reported.
pub fn validate_period(period: &WorkPeriod, at: EvaluationInstant) -> AppResult<()> {
    match period.end {
        EndDate::On(end) if period.start > end => Err(AppError::InvertedRange {
            start: format_date(period.start),
            end: format_date(end),
        }),
        EndDate::Ongoing if period.start > at.date() => Err(AppError::StartAfterEvaluation {
            start: format_date(period.start),
            at: at.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Validate every period, collecting all issues instead of stopping at the
/// first one.
pub fn validate_history(periods: &[WorkPeriod], at: EvaluationInstant) -> Vec<PeriodIssue> {
    periods
        .iter()
        .enumerate()
        .filter_map(|(index, p)| {
            validate_period(p, at)
                .err()
                .map(|error| PeriodIssue { index, error })
        })
        .collect()
}
