use chrono::NaiveDate;
use std::fmt;

/// Fixed reference date used to resolve ongoing periods.
///
/// One instant is chosen per computation pass and passed down explicitly, so
/// every ongoing period in a batch resolves to the same day and results are
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EvaluationInstant(NaiveDate);

impl EvaluationInstant {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for EvaluationInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
