//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records from the master file
//! - `transaction`: Transaction codes and records for the daily file
//! - `command`: The command schema of the input protocol
//! - `error`: Error types for the front end

pub mod account;
pub mod command;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountNumber, AccountStatus};
pub use command::{Command, CommandKind};
pub use error::FrontEndError;
pub use transaction::{Transaction, TransactionCode};
