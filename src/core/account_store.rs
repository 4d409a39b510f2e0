//! Account store module
//!
//! This module provides the `AccountStore` struct which holds the accounts
//! loaded from the master file for the duration of one session.
//!
//! The AccountStore is responsible for:
//! - Replacing its contents wholesale at login
//! - Looking up accounts by number
//! - Checking whether a holder name is already in use
//!
//! It never changes an individual account.

use crate::io::account_file::load_accounts;
use crate::types::{Account, AccountNumber, FrontEndError};
use std::collections::HashMap;
use std::path::Path;

/// Read-only view of the account master file
#[derive(Debug, Default)]
pub struct AccountStore {
    /// Map of account numbers to accounts
    accounts: HashMap<AccountNumber, Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        AccountStore {
            accounts: accounts
                .into_iter()
                .map(|account| (account.number.clone(), account))
                .collect(),
        }
    }

    /// Replace the store's contents with the master file at `path`
    ///
    /// The file is parsed completely before anything is replaced, so a
    /// failed load leaves the previous contents untouched.
    ///
    /// # Returns
    ///
    /// The number of accounts loaded
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`, `Io` or `MalformedRecord` from the parser.
    pub fn load(&mut self, path: &Path) -> Result<usize, FrontEndError> {
        self.accounts = load_accounts(path)?;
        Ok(self.accounts.len())
    }

    /// Drop every account
    pub fn clear(&mut self) {
        self.accounts.clear();
    }

    /// Look up an account by its 5-digit number
    pub fn get(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    /// Whether any account is held by `name` (exact match)
    pub fn contains_holder(&self, name: &str) -> bool {
        self.accounts.values().any(|account| account.holder == name)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountStatus;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn sample_store() -> AccountStore {
        AccountStore::from_accounts([
            Account::new("00020", "Bob Jones", AccountStatus::Disabled, dec!(10.00)),
            Account::new("00010", "Alice Smith", AccountStatus::Active, dec!(250.00)),
        ])
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = AccountStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("00010"), None);
    }

    #[test]
    fn test_get_and_contains_holder() {
        let store = sample_store();

        assert_eq!(store.get("00010").map(|a| a.holder.as_str()), Some("Alice Smith"));
        assert!(store.contains_holder("Bob Jones"));
        assert!(!store.contains_holder("bob jones"));
        assert!(!store.contains_holder("Carol"));
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut store = sample_store();
        let file = create_temp_file("00030 Carol King           A  0001.00\nEND_OF_FILE\n");

        let count = store.load(file.path()).unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("00010").is_none());
        assert_eq!(store.get("00030").map(|a| a.balance), Some(dec!(1.00)));
    }

    #[test]
    fn test_failed_load_keeps_previous_contents() {
        let mut store = sample_store();
        let file = create_temp_file("00030 Carol King           Q  0001.00\n");

        let result = store.load(file.path());

        assert!(matches!(result, Err(FrontEndError::MalformedRecord { .. })));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut store = sample_store();
        store.clear();
        assert!(store.is_empty());
    }
}
