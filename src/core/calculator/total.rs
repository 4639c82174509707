use crate::core::calculator::label::format_duration;
use crate::core::calculator::months::months_between;
use crate::models::{DurationMonths, EvaluationInstant, WorkPeriod};

/// Sum of the whole months of every period. Overlapping periods are counted
/// twice.
///
/// The sum saturates at `u64::MAX` months instead of overflowing. That cap
/// is lossy, but it needs billions of maximal-length periods to reach.
pub fn total_months(periods: &[WorkPeriod], at: EvaluationInstant) -> DurationMonths {
    periods
        .iter()
        .map(|p| months_between(p.start, p.end, at))
        .sum()
}

/// Combined tenure label, e.g. "2 years". An empty history gives
/// "Less than a month".
pub fn total_experience(periods: &[WorkPeriod], at: EvaluationInstant) -> String {
    format_duration(total_months(periods, at))
}
