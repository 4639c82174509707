use crate::errors::{AppError, AppResult};
use crate::models::EvaluationInstant;
use crate::ui::messages::success;
use crate::utils::date::parse_evaluation_instant;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_history")]
    pub history: String,
    /// Fixed evaluation date (YYYY-MM-DD). When unset, today is used.
    #[serde(default)]
    pub evaluation_date: Option<String>,
    #[serde(default = "default_ongoing_label")]
    pub ongoing_label: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_history() -> String {
    Config::history_file().to_string_lossy().to_string()
}
fn default_ongoing_label() -> String {
    "Present".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history: default_history(),
            evaluation_date: None,
            ongoing_label: default_ongoing_label(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtenure")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtenure")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtenure.conf")
    }

    /// Return the default path of the work-history file
    pub fn history_file() -> PathBuf {
        Self::config_dir().join("history.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// History path with `~` expanded.
    pub fn history_path(&self) -> PathBuf {
        expand_tilde(&self.history)
    }

    /// Configured evaluation instant, if any.
    pub fn evaluation_instant(&self) -> AppResult<Option<EvaluationInstant>> {
        match self.evaluation_date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_evaluation_instant(raw)
                .map(Some)
                .map_err(|e| AppError::Config(format!("evaluation_date: {e}"))),
        }
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Resolve a `--history` argument: `~` is expanded and a relative path
    /// is taken from the working directory, for every command alike.
    pub fn resolve_history_arg(raw: &str) -> AppResult<PathBuf> {
        let p = expand_tilde(raw);
        if p.is_absolute() {
            Ok(p)
        } else {
            Ok(env::current_dir()?.join(p))
        }
    }

    /// Initialize the configuration directory and file.
    ///
    /// In test mode the configuration file is left untouched and only the
    /// directory is created. Returns the history path the config points to.
    pub fn init_all(custom_history: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let history = match custom_history {
            Some(name) => Self::resolve_history_arg(&name)?,
            None => Self::history_file(),
        };

        let config = Config {
            history: history.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(history)
    }
}
