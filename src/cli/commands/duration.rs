use crate::cli::parser::Commands;
use crate::core::{format_duration, months_between, validate_period};
use crate::errors::AppResult;
use crate::models::{EvaluationInstant, WorkPeriod};
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, parse_end_date};

/// Handle the `duration` command: ad-hoc computation for one period.
pub fn handle(cmd: &Commands, at: EvaluationInstant) -> AppResult<()> {
    if let Commands::Duration { start, end } = cmd {
        let start = parse_date(start)?;
        let end = parse_end_date(end)?;

        if let Err(e) = validate_period(&WorkPeriod::new(start, end), at) {
            warning(e);
        }

        let months = months_between(start, end, at);
        println!("{} ({} months)", format_duration(months), months.months());
    }
    Ok(())
}
