use crate::models::evaluation_instant::EvaluationInstant;
use chrono::NaiveDate;

/// End of a work period: a concrete date, or still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndDate {
    On(NaiveDate),
    Ongoing,
}

impl EndDate {
    /// Literal used in history files for open-ended employment.
    pub const ONGOING: &'static str = "Ongoing";

    /// Resolve to a concrete date, using `at` for ongoing periods.
    pub fn resolve(&self, at: EvaluationInstant) -> NaiveDate {
        match self {
            EndDate::On(d) => *d,
            EndDate::Ongoing => at.date(),
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, EndDate::Ongoing)
    }

    /// Concrete date if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            EndDate::On(d) => Some(*d),
            EndDate::Ongoing => None,
        }
    }

    /// Text form, with `ongoing_label` for open periods.
    pub fn display_with(&self, ongoing_label: &str) -> String {
        match self {
            EndDate::On(d) => d.format("%Y-%m-%d").to_string(),
            EndDate::Ongoing => ongoing_label.to_string(),
        }
    }
}
