//! rTenure library root.
//! Exposes the duration engine (`core`), the CLI parser and the high-level
//! `run()` used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod history;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::EvaluationInstant;
use utils::date::{parse_evaluation_instant, today};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, at: EvaluationInstant) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg, at),
        Commands::Total { .. } => cli::commands::total::handle(&cli.command, cfg, at),
        Commands::Duration { .. } => cli::commands::duration::handle(&cli.command, at),
        Commands::Check => cli::commands::check::handle(cfg, at),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, at),
    }
}

/// Pick the evaluation instant for this run: `--at`, then the configured
/// `evaluation_date`, then today. This is the only place the clock is read.
pub fn resolve_instant(cli: &Cli, cfg: &Config) -> AppResult<EvaluationInstant> {
    if let Some(raw) = &cli.at {
        return parse_evaluation_instant(raw);
    }
    Ok(cfg
        .evaluation_instant()?
        .unwrap_or_else(|| EvaluationInstant::new(today())))
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. command-line override of the history file
    if let Some(custom) = &cli.history {
        cfg.history = Config::resolve_history_arg(custom)?
            .to_string_lossy()
            .to_string();
    }

    // 4. one evaluation instant for the whole run
    let at = resolve_instant(&cli, &cfg)?;

    dispatch(&cli, &cfg, at)
}
