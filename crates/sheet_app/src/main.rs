use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sheet_core::{Severity, DEFAULT_LOADING_MESSAGE, DEFAULT_TRUNCATE_LENGTH};
use sheet_engine::Method;

mod platform;

/// Answer sheet front-end helpers from the command line
#[derive(Debug, Parser)]
#[command(name = "sheet", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Settings file (RON)
    #[arg(long, global = true, default_value = platform::settings::DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Where log output goes
    #[arg(long, global = true, value_enum, default_value_t = LogTarget::Terminal)]
    log: LogTarget,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    Terminal,
    File,
    Both,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format a byte count for display
    Size { bytes: u64 },

    /// Shorten text, appending "..." when cut
    Truncate {
        text: String,
        #[arg(short, long, default_value_t = DEFAULT_TRUNCATE_LENGTH)]
        length: usize,
    },

    /// Check that an address looks like an email
    Email { address: String },

    /// Format a timestamp in the local time zone
    Date { value: String },

    /// Generate random element ids
    Id {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Print loading indicator markup
    Loader {
        #[arg(default_value = DEFAULT_LOADING_MESSAGE)]
        message: String,
    },

    /// Show a notification and print its markup
    Notify {
        message: String,
        #[arg(short, long, default_value_t = Severity::Info)]
        severity: Severity,
    },

    /// Send a JSON request and print the JSON reply
    Request {
        url: String,
        #[arg(short = 'X', long, default_value_t = Method::Get)]
        method: Method,
        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Copy text to the system clipboard
    Copy { text: String },

    /// Write the default settings file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::run(cli)
}
