use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_keys};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if (*check || *migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {} (run `rtenure init`)",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let missing = missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        if *migrate {
            if migrate_config(&path)? {
                success("Configuration file updated with default values.");
            } else {
                info("Configuration file already up to date.");
            }
        }
    }

    Ok(())
}
