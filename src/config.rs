//! Runtime configuration
//!
//! Built from the command-line arguments (see [`crate::cli::CliArgs::to_config`]).

use std::path::PathBuf;

/// File locations used by one front end run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontEndConfig {
    /// Account master file, read at every login
    pub accounts_path: PathBuf,

    /// Daily transaction file, appended at every logout
    pub transactions_path: PathBuf,
}

impl FrontEndConfig {
    pub fn new(accounts_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        FrontEndConfig {
            accounts_path: accounts_path.into(),
            transactions_path: transactions_path.into(),
        }
    }
}
