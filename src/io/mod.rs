//! I/O module
//!
//! Handles the fixed-width files and the command input stream.
//!
//! # Components
//!
//! - `account_file` - Account master file parsing
//! - `transaction_file` - Daily transaction file encoding and appending
//! - `command_reader` - Line-oriented command reader with iterator interface

pub mod account_file;
pub mod command_reader;
pub mod transaction_file;

pub use account_file::{load_accounts, parse_account_line, parse_accounts};
pub use command_reader::CommandReader;
pub use transaction_file::{
    append_transactions, encode_transaction, write_transactions, RECORD_WIDTH,
};
