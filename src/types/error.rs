//! Error types for the banking front end
//!
//! This module defines all error types that can occur while processing a
//! session's commands. Messages are printed directly to the terminal after an
//! `Error: ` prefix, so they are written for the operator.
//!
//! # Error Categories
//!
//! - **Session Errors**: not logged in, already logged in, insufficient privilege
//! - **Validation Errors**: invalid amount, name, mode, company code
//! - **Account Errors**: unknown, inactive, holder mismatch, insufficient funds
//! - **Protocol Errors**: unknown command, missing argument lines
//! - **File Errors**: missing files, I/O failures, malformed account records
//!
//! Only file errors are fatal. Everything else rejects a single command and
//! processing continues with the next one.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking front end
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontEndError {
    /// A command other than login was issued while logged out
    #[error("No transaction other than login is accepted before a login")]
    NotLoggedIn,

    /// Login was issued while a session is active
    #[error("Already logged in")]
    AlreadyLoggedIn,

    /// A privileged command was issued from a standard session
    #[error("Privileged transaction '{command}' is only accepted in admin mode")]
    InsufficientPrivilege {
        /// Name of the rejected command
        command: String,
    },

    /// The account number is malformed or not in the master file
    #[error("Account number {number} not found")]
    UnknownAccount {
        /// The account number as entered
        number: String,
    },

    /// The account is disabled or deleted
    #[error("Account {number} is disabled or deleted")]
    InactiveAccount {
        /// The account number
        number: String,
    },

    /// Amount is non-numeric, out of range, or above the session's ceiling
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount {
        /// The amount as entered
        amount: String,
        /// Why it was rejected
        reason: String,
    },

    /// Name is empty or longer than 20 characters
    #[error("Invalid name '{name}': must be 1-20 characters")]
    InvalidName {
        /// The name as entered
        name: String,
    },

    /// Login mode is neither `standard` nor `admin`
    #[error("Invalid login mode '{mode}': only 'standard' or 'admin' accepted")]
    InvalidMode {
        /// The mode as entered
        mode: String,
    },

    /// Bill payment to an unknown company
    #[error("Invalid company code '{company}': must be EC, CQ, or TV")]
    InvalidCompany {
        /// The company code as entered
        company: String,
    },

    /// Account creation with a holder name that is already in use
    #[error("Account name '{name}' already exists")]
    DuplicateName {
        /// The duplicated name
        name: String,
    },

    /// The supplied name is not the holder of the account
    #[error("Name '{name}' does not match holder of account {number}")]
    NameMismatch {
        /// The name as entered
        name: String,
        /// The account number
        number: String,
    },

    /// A standard user addressed an account they do not hold
    #[error("User '{user}' is not the holder of account {number}")]
    NotAccountHolder {
        /// The session's user
        user: String,
        /// The account number
        number: String,
    },

    /// Amount is larger than the account balance
    #[error("Insufficient funds in account {number}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// The account number
        number: String,
        /// Current balance
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Command name is not part of the protocol
    #[error("Invalid transaction code: {command}")]
    UnknownCommand {
        /// The command name as entered
        command: String,
    },

    /// Input ended before all argument lines of a command were read
    #[error("Input ended before '{field}' of {command} was read")]
    MissingArgument {
        /// Name of the command
        command: String,
        /// Name of the missing argument
        field: String,
    },

    /// A line of the account master file does not fit the fixed-width layout
    ///
    /// This is a fatal error: a partially loaded account list cannot be
    /// trusted for validation.
    #[error("Malformed account record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the account file
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading or writing files
    ///
    /// This is a fatal error.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for FrontEndError {
    fn from(error: std::io::Error) -> Self {
        FrontEndError::Io {
            message: error.to_string(),
        }
    }
}

impl FrontEndError {
    /// Whether the error must stop the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FrontEndError::MalformedRecord { .. }
                | FrontEndError::FileNotFound { .. }
                | FrontEndError::Io { .. }
        )
    }

    /// Convert an I/O error on `path`, keeping "not found" distinguishable
    pub fn from_io(error: std::io::Error, path: &std::path::Path) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            FrontEndError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            FrontEndError::Io {
                message: format!("{}: {}", path.display(), error),
            }
        }
    }

    /// Create an InsufficientPrivilege error
    pub fn insufficient_privilege(command: &str) -> Self {
        FrontEndError::InsufficientPrivilege {
            command: command.to_string(),
        }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(number: &str) -> Self {
        FrontEndError::UnknownAccount {
            number: number.to_string(),
        }
    }

    /// Create an InactiveAccount error
    pub fn inactive_account(number: &str) -> Self {
        FrontEndError::InactiveAccount {
            number: number.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, reason: impl Into<String>) -> Self {
        FrontEndError::InvalidAmount {
            amount: amount.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidName error
    pub fn invalid_name(name: &str) -> Self {
        FrontEndError::InvalidName {
            name: name.to_string(),
        }
    }

    /// Create an InvalidMode error
    pub fn invalid_mode(mode: &str) -> Self {
        FrontEndError::InvalidMode {
            mode: mode.to_string(),
        }
    }

    /// Create an InvalidCompany error
    pub fn invalid_company(company: &str) -> Self {
        FrontEndError::InvalidCompany {
            company: company.to_string(),
        }
    }

    /// Create a DuplicateName error
    pub fn duplicate_name(name: &str) -> Self {
        FrontEndError::DuplicateName {
            name: name.to_string(),
        }
    }

    /// Create a NameMismatch error
    pub fn name_mismatch(name: &str, number: &str) -> Self {
        FrontEndError::NameMismatch {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    /// Create a NotAccountHolder error
    pub fn not_account_holder(user: &str, number: &str) -> Self {
        FrontEndError::NotAccountHolder {
            user: user.to_string(),
            number: number.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(number: &str, balance: Decimal, requested: Decimal) -> Self {
        FrontEndError::InsufficientFunds {
            number: number.to_string(),
            balance,
            requested,
        }
    }

    /// Create an UnknownCommand error
    pub fn unknown_command(command: &str) -> Self {
        FrontEndError::UnknownCommand {
            command: command.to_string(),
        }
    }

    /// Create a MissingArgument error
    pub fn missing_argument(command: &str, field: &str) -> Self {
        FrontEndError::MissingArgument {
            command: command.to_string(),
            field: field.to_string(),
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(line: usize, reason: impl Into<String>) -> Self {
        FrontEndError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
