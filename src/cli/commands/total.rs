use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{format_duration, total_months};
use crate::errors::AppResult;
use crate::history::load_history;
use crate::models::EvaluationInstant;

/// Handle the `total` command. Output is a bare line, handy for scripts.
pub fn handle(cmd: &Commands, cfg: &Config, at: EvaluationInstant) -> AppResult<()> {
    if let Commands::Total { months } = cmd {
        let periods = load_history(&cfg.history_path())?;
        let total = total_months(&periods, at);

        if *months {
            println!("{}", total.months());
        } else {
            println!("{}", format_duration(total));
        }
    }
    Ok(())
}
