use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::build_report;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::history::load_history;
use crate::models::EvaluationInstant;

pub fn handle(cmd: &Commands, cfg: &Config, at: EvaluationInstant) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let periods = load_history(&cfg.history_path())?;
        let report = build_report(&periods, at);
        ExportLogic::export(&report, *format, file, &cfg.ongoing_label, *force)?;
    }
    Ok(())
}
