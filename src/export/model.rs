// src/export/model.rs

use crate::core::PeriodSummary;
use crate::utils::date::format_date;
use serde::Serialize;

/// Flat row used for CSV export, one per work period.
#[derive(Serialize, Clone, Debug)]
pub struct PeriodExport {
    pub entry: usize,
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub months: u64,
    pub duration: String,
}

impl PeriodExport {
    pub fn from_summary(s: &PeriodSummary, ongoing_label: &str) -> Self {
        Self {
            entry: s.index + 1,
            title: s.title.clone().unwrap_or_default(),
            company: s.company.clone().unwrap_or_default(),
            start: format_date(s.start),
            end: s
                .end
                .map(format_date)
                .unwrap_or_else(|| ongoing_label.to_string()),
            months: s.months.months(),
            duration: s.label.clone(),
        }
    }
}
