//! Date utilities: strict YYYY-MM-DD parsing and the "ongoing" sentinel.

use crate::errors::{AppError, AppResult};
use crate::models::{EndDate, EvaluationInstant};
use chrono::NaiveDate;

/// Accepted spellings of the open-ended sentinel (compared case-insensitively).
const ONGOING_ALIASES: [&str; 2] = ["ongoing", "present"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// True when `s` has the exact `DDDD-DD-DD` shape.
fn has_iso_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Parse a calendar date in `YYYY-MM-DD` form.
///
/// chrono alone would also take `2024-1-5`, so the shape is checked first.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if !has_iso_shape(s) {
        return Err(AppError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse an end date: `YYYY-MM-DD` or the ongoing sentinel.
pub fn parse_end_date(s: &str) -> AppResult<EndDate> {
    let trimmed = s.trim();
    if ONGOING_ALIASES
        .iter()
        .any(|a| trimmed.eq_ignore_ascii_case(a))
    {
        return Ok(EndDate::Ongoing);
    }
    parse_date(trimmed).map(EndDate::On)
}

pub fn parse_evaluation_instant(s: &str) -> AppResult<EvaluationInstant> {
    parse_date(s).map(EvaluationInstant::new)
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
