use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTenure
#[derive(Parser)]
#[command(
    name = "rtenure",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute work-experience durations (\"X years, Y months\") from a work history",
    long_about = None
)]
pub struct Cli {
    /// Override the work-history file path
    #[arg(global = true, long = "history", value_name = "FILE")]
    pub history: Option<String>,

    /// Evaluation date used for ongoing periods (YYYY-MM-DD); defaults to
    /// the configured `evaluation_date`, then to today
    #[arg(global = true, long = "at", value_name = "DATE")]
    pub at: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty work-history file
    Init,

    /// Inspect or upgrade the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,
    },

    /// List every work period with its duration, then the total
    List,

    /// Print the total experience label only
    Total {
        #[arg(long = "months", help = "Print the total as a month count")]
        months: bool,
    },

    /// Compute the duration between two dates
    Duration {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD) or "Ongoing"
        end: String,
    },

    /// Validate the work history (date ordering)
    Check,

    /// Export the per-entry durations and total
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
