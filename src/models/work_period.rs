use crate::models::end_date::EndDate;
use chrono::NaiveDate;

/// One employment interval from the work history.
///
/// `title` and `company` are descriptive only and never take part in any
/// duration computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPeriod {
    pub start: NaiveDate,
    pub end: EndDate,
    pub title: Option<String>,
    pub company: Option<String>,
}

impl WorkPeriod {
    pub fn new(start: NaiveDate, end: EndDate) -> Self {
        Self {
            start,
            end,
            title: None,
            company: None,
        }
    }

    /// Period ending on a concrete date.
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(start, EndDate::On(end))
    }

    /// Period that is still running.
    pub fn ongoing(start: NaiveDate) -> Self {
        Self::new(start, EndDate::Ongoing)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}
