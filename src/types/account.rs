//! Account-related types for the banking front end
//!
//! This module defines the Account structure loaded from the account master
//! file, together with its status code.

use rust_decimal::Decimal;

/// Account number
///
/// Always a 5-digit, zero-padded ASCII string (e.g. `00010`).
pub type AccountNumber = String;

/// Account status as stored in the master file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    /// `A` - the account accepts transactions
    Active,

    /// `D` - the account is disabled or deleted
    Disabled,
}

impl AccountStatus {
    /// Parse a single-character status code
    ///
    /// Returns `None` for anything other than `A` or `D`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(AccountStatus::Active),
            'D' => Some(AccountStatus::Disabled),
            _ => None,
        }
    }
}

/// Bank account as read from the account master file
///
/// The front end never mutates an account. Balance and status changes are
/// applied downstream by batch processing of the daily transaction file.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The 5-digit account number (unique key)
    pub number: AccountNumber,

    /// Holder name, trimmed, at most 20 characters
    pub holder: String,

    /// Whether the account is active or disabled
    pub status: AccountStatus,

    /// Current balance with 2 fractional digits
    pub balance: Decimal,
}

impl Account {
    /// Create a new account record
    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        status: AccountStatus,
        balance: Decimal,
    ) -> Self {
        Account {
            number: number.into(),
            holder: holder.into(),
            status,
            balance,
        }
    }

    /// Whether the account currently accepts transactions
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
