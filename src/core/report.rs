use crate::core::calculator::label::format_duration;
use crate::core::calculator::months::months_between;
use crate::models::{DurationMonths, EvaluationInstant, WorkPeriod};
use chrono::NaiveDate;
use serde::Serialize;

/// Per-entry breakdown: the period plus its computed duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub index: usize,
    pub title: Option<String>,
    pub company: Option<String>,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub ongoing: bool,
    pub months: DurationMonths,
    pub label: String,
}

/// All entries plus the aggregate, computed against one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceReport {
    pub evaluated_at: NaiveDate,
    pub entries: Vec<PeriodSummary>,
    pub total_months: DurationMonths,
    pub total_label: String,
}

pub fn summarize(periods: &[WorkPeriod], at: EvaluationInstant) -> Vec<PeriodSummary> {
    periods
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let months = months_between(p.start, p.end, at);
            PeriodSummary {
                index,
                title: p.title.clone(),
                company: p.company.clone(),
                start: p.start,
                end: p.end.date(),
                ongoing: p.end.is_ongoing(),
                months,
                label: format_duration(months),
            }
        })
        .collect()
}

/// Build the full report. The total is the sum of the entries, so it
/// always matches `total_experience` for the same input.
pub fn build_report(periods: &[WorkPeriod], at: EvaluationInstant) -> ExperienceReport {
    let entries = summarize(periods, at);
    let total_months: DurationMonths = entries.iter().map(|e| e.months).sum();

    ExperienceReport {
        evaluated_at: at.date(),
        entries,
        total_months,
        total_label: format_duration(total_months),
    }
}
