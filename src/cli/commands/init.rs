use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::history::save_history;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty work-history file (if missing)
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing rTenure…");

    let history = Config::init_all(cli.history.clone(), cli.test)?;

    if history.exists() {
        info(format!("Work history already present: {}", history.display()));
    } else {
        if let Some(parent) = history.parent() {
            std::fs::create_dir_all(parent)?;
        }
        save_history(&history, &[])?;
        success(format!("Work history: {}", history.display()));
    }

    success("rTenure initialization completed!");
    Ok(())
}
