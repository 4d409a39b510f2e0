//! Transaction-related types for the banking front end
//!
//! This module defines the transaction codes and the in-memory transaction
//! record that is later encoded into the daily transaction file.

use super::account::AccountNumber;
use rust_decimal::Decimal;
use std::fmt;

/// Default value of the auxiliary `misc` field
pub const DEFAULT_MISC: &str = "00";

/// Account number used by records that do not reference an existing account
pub const NO_ACCOUNT: &str = "00000";

/// Transaction codes written to the daily transaction file
///
/// Each variant maps to the 2-digit code in the first column of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCode {
    /// `00` - terminates the records of one session
    EndOfSession,
    /// `01` - debit an account
    Withdrawal,
    /// `02` - move funds between two accounts
    Transfer,
    /// `03` - pay a bill to a known company
    Paybill,
    /// `04` - credit an account
    Deposit,
    /// `05` - open a new account (admin)
    Create,
    /// `06` - delete an account (admin)
    Delete,
    /// `07` - disable an account (admin)
    Disable,
    /// `08` - switch the account's payment plan (admin)
    ChangePlan,
}

impl TransactionCode {
    /// The 2-digit wire code
    pub fn code(self) -> &'static str {
        match self {
            TransactionCode::EndOfSession => "00",
            TransactionCode::Withdrawal => "01",
            TransactionCode::Transfer => "02",
            TransactionCode::Paybill => "03",
            TransactionCode::Deposit => "04",
            TransactionCode::Create => "05",
            TransactionCode::Delete => "06",
            TransactionCode::Disable => "07",
            TransactionCode::ChangePlan => "08",
        }
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Approved transaction waiting to be written at logout
///
/// Created by the engine once every check for a command has passed.
/// Never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Transaction type
    pub code: TransactionCode,

    /// Account holder or acting user name (at most 20 characters)
    pub name: String,

    /// 5-digit account number, `00000` when no account applies
    pub account_number: AccountNumber,

    /// Amount with 2 fractional digits, zero for status changes
    pub amount: Decimal,

    /// 2-character auxiliary field (company code for bill payments)
    pub misc: String,
}

impl Transaction {
    /// Create a transaction with the default `misc` field
    pub fn new(
        code: TransactionCode,
        name: impl Into<String>,
        account_number: impl Into<AccountNumber>,
        amount: Decimal,
    ) -> Self {
        Transaction {
            code,
            name: name.into(),
            account_number: account_number.into(),
            amount,
            misc: DEFAULT_MISC.to_string(),
        }
    }

    /// Replace the auxiliary field
    pub fn with_misc(mut self, misc: impl Into<String>) -> Self {
        self.misc = misc.into();
        self
    }

    /// The terminating record appended at logout
    pub fn end_of_session() -> Self {
        Transaction::new(TransactionCode::EndOfSession, "", NO_ACCOUNT, Decimal::ZERO)
    }
}
