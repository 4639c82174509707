use crate::config::Config;
use crate::core::validate_history;
use crate::errors::{AppError, AppResult};
use crate::history::load_history;
use crate::models::EvaluationInstant;
use crate::ui::messages::{error, success};

/// Handle the `check` command. Fails when at least one entry is invalid.
pub fn handle(cfg: &Config, at: EvaluationInstant) -> AppResult<()> {
    let path = cfg.history_path();
    let periods = load_history(&path)?;
    let issues = validate_history(&periods, at);

    if issues.is_empty() {
        success(format!(
            "{}: {} entries, all valid",
            path.display(),
            periods.len()
        ));
        return Ok(());
    }

    for issue in &issues {
        error(format!("entry #{}: {}", issue.index + 1, issue.error));
    }

    Err(AppError::History(format!(
        "{} invalid entr{} in {}",
        issues.len(),
        if issues.len() == 1 { "y" } else { "ies" },
        path.display()
    )))
}
