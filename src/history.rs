//! Work-history file: a YAML list of employment periods.
//!
//! ```yaml
//! entries:
//!   - title: Backend Engineer
//!     company: Acme
//!     start: 2023-09-01
//!     end: 2024-10-21
//!   - title: Platform Engineer
//!     start: 2024-10-22
//!     end: Ongoing
//! ```
//!
//! Dates are kept as strings here and go through the strict parser in
//! `utils::date`, so a malformed entry is reported with its position.

use crate::errors::{AppError, AppResult};
use crate::models::{EndDate, WorkPeriod};
use crate::utils::date::{format_date, parse_date, parse_end_date};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HistoryFile {
    #[serde(default)]
    pub entries: Vec<HistoryRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub start: String,
    /// Missing end means the period is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl HistoryRecord {
    pub fn to_period(&self) -> AppResult<WorkPeriod> {
        let start = parse_date(&self.start)?;
        let end = match &self.end {
            Some(raw) => parse_end_date(raw)?,
            None => EndDate::Ongoing,
        };

        Ok(WorkPeriod {
            start,
            end,
            title: self.title.clone(),
            company: self.company.clone(),
        })
    }
}

impl From<&WorkPeriod> for HistoryRecord {
    fn from(p: &WorkPeriod) -> Self {
        Self {
            title: p.title.clone(),
            company: p.company.clone(),
            start: format_date(p.start),
            end: Some(p.end.display_with(EndDate::ONGOING)),
        }
    }
}

/// Parse a history document. Entry numbers in errors are 1-based.
pub fn parse_history(content: &str) -> AppResult<Vec<WorkPeriod>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let file: HistoryFile = serde_yaml::from_str(content)?;

    file.entries
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            rec.to_period()
                .map_err(|e| AppError::History(format!("entry #{}: {}", i + 1, e)))
        })
        .collect()
}

pub fn load_history(path: &Path) -> AppResult<Vec<WorkPeriod>> {
    if !path.exists() {
        return Err(AppError::History(format!(
            "history file not found: {} (run `rtenure init` or pass --history)",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    parse_history(&content)
}

pub fn save_history(path: &Path, periods: &[WorkPeriod]) -> AppResult<()> {
    let file = HistoryFile {
        entries: periods.iter().map(HistoryRecord::from).collect(),
    };
    let yaml = serde_yaml::to_string(&file)?;
    fs::write(path, yaml)?;
    Ok(())
}
