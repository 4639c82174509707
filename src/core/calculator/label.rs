use crate::models::DurationMonths;

pub const LESS_THAN_A_MONTH: &str = "Less than a month";

fn render(years: u64, remainder: u64) -> String {
    match (years, remainder) {
        (0, 0) => LESS_THAN_A_MONTH.to_string(),
        (0, r) => format!("{r} months"),
        (y, 0) => format!("{y} years"),
        (y, r) => format!("{y} years, {r} months"),
    }
}

/// Human-readable label for a month count.
///
/// Units are never singularised: 13 months renders as "1 years, 1 months".
pub fn format_duration(months: DurationMonths) -> String {
    render(months.years(), months.remainder())
}

/// Same as [`format_duration`] for a signed count.
///
/// # Panics
///
/// Panics if `months` is negative; no month count produced by this crate
/// can be negative.
pub fn format_duration_i64(months: i64) -> String {
    assert!(months >= 0, "negative month count: {months}");
    format_duration(DurationMonths::new(months.unsigned_abs()))
}
