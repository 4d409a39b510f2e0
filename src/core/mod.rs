//! Core business logic module
//!
//! This module contains the command authorization components:
//! - `session` - Logged-out / standard / admin state machine
//! - `validator` - Stateless amount, name and mode checks
//! - `account_store` - Accounts loaded from the master file
//! - `transaction_log` - Approved transactions waiting for logout
//! - `engine` - Per-command authorization rules

pub mod account_store;
pub mod engine;
pub mod session;
pub mod transaction_log;
pub mod validator;

pub use account_store::AccountStore;
pub use engine::{Outcome, TransactionEngine};
pub use session::{Mode, Session};
pub use transaction_log::TransactionLog;
