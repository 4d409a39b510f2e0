//! Banking Front End Library
//! # Overview
//!
//! This library implements a single-terminal banking front end: it reads
//! line-oriented commands, authorizes them against the session and the
//! account master file, and records approved actions as fixed-width lines in
//! the daily transaction file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, Command, errors)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`config`] - File locations for a run
//! - [`core`] - Business logic components:
//!   - [`core::session`] - Logged-out / standard / admin state machine
//!   - [`core::validator`] - Amount, name and mode checks
//!   - [`core::account_store`] - Accounts loaded at login
//!   - [`core::transaction_log`] - Approved transactions until logout
//!   - [`core::engine`] - Per-command authorization rules
//! - [`io`] - Fixed-width file formats and the command reader
//! - [`app`] - Session runner tying input, engine and output together
//!
//! # Transaction Types
//!
//! | Code | Command    | Privilege  | Standard ceiling |
//! |------|------------|------------|------------------|
//! | 01   | withdrawal | logged in  | 500.00           |
//! | 02   | transfer   | logged in  | 1000.00          |
//! | 03   | paybill    | logged in  | 1000.00          |
//! | 04   | deposit    | logged in  | 1000.00          |
//! | 05   | create     | admin      | -                |
//! | 06   | delete     | admin      | -                |
//! | 07   | disable    | admin      | -                |
//! | 08   | changeplan | admin      | -                |
//!
//! Every session's records end with a code `00` end-of-session record,
//! written at logout.

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use config::FrontEndConfig;
pub use crate::core::{AccountStore, Mode, Outcome, Session, TransactionEngine, TransactionLog};
pub use crate::io::{encode_transaction, CommandReader};
pub use types::{
    Account, AccountNumber, AccountStatus, Command, CommandKind, FrontEndError, Transaction,
    TransactionCode,
};
