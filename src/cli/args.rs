use crate::config::FrontEndConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Banking terminal front end recording daily transactions
#[derive(Parser, Debug)]
#[command(name = "banking-frontend")]
#[command(about = "Banking terminal front end recording daily transactions", long_about = None)]
pub struct CliArgs {
    /// Current bank accounts file (fixed-width, read at login)
    #[arg(value_name = "ACCOUNTS", help = "Path to the current bank accounts file")]
    pub accounts_file: PathBuf,

    /// Daily transaction file (appended at logout)
    #[arg(value_name = "TRANSACTIONS", help = "Path to the daily transaction file")]
    pub transactions_file: PathBuf,

    /// Command input file; standard input when omitted
    #[arg(
        value_name = "INPUT",
        help = "Read commands from this file instead of standard input"
    )]
    pub input_file: Option<PathBuf>,

    /// Log verbosity on stderr
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Create a FrontEndConfig from CLI arguments
    pub fn to_config(&self) -> FrontEndConfig {
        FrontEndConfig::new(&self.accounts_file, &self.transactions_file)
    }

    /// Maximum log level selected by the `-v` flags
    ///
    /// Warnings are always shown.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
