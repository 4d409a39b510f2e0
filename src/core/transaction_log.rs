//! Pending transaction log
//!
//! Approved transactions accumulate here during a session and are written to
//! the daily transaction file in one append at logout.

use crate::io::transaction_file::{append_transactions, encode_transaction};
use crate::types::{FrontEndError, Transaction};
use std::path::Path;

/// Transactions approved since the last flush
#[derive(Debug, Default)]
pub struct TransactionLog {
    pending: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        TransactionLog {
            pending: Vec::new(),
        }
    }

    /// Register an approved transaction
    pub fn add(&mut self, tx: Transaction) {
        tracing::debug!(record = %encode_transaction(&tx), "transaction recorded");
        self.pending.push(tx);
    }

    /// Append the code `00` record that terminates a session
    pub fn append_end_of_session(&mut self) {
        self.add(Transaction::end_of_session());
    }

    /// Append every pending record to the file at `path` and clear the list
    ///
    /// The list is only cleared once the write succeeded.
    ///
    /// # Returns
    ///
    /// The number of records written
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` or `Io` if the file cannot be written.
    pub fn flush(&mut self, path: &Path) -> Result<usize, FrontEndError> {
        append_transactions(path, &self.pending)?;
        let written = self.pending.len();
        self.pending.clear();
        tracing::info!(path = %path.display(), records = written, "daily transactions written");
        Ok(written)
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionCode;
    use rust_decimal_macros::dec;
    use std::fs;

    #[test]
    fn test_add_and_end_of_session() {
        let mut log = TransactionLog::new();
        log.add(Transaction::new(
            TransactionCode::Withdrawal,
            "Alice Smith",
            "00010",
            dec!(100.00),
        ));
        log.append_end_of_session();

        assert_eq!(log.len(), 2);
        assert_eq!(log.pending()[1].code, TransactionCode::EndOfSession);
        assert_eq!(
            log.pending().iter().map(encode_transaction).collect::<Vec<_>>(),
            vec![
                "01 Alice Smith          00010 00100.00 0".to_string(),
                "00                      00000 00000.00 0".to_string(),
            ]
        );
    }

    #[test]
    fn test_flush_writes_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daily.txt");
        let mut log = TransactionLog::new();
        log.add(Transaction::new(TransactionCode::Deposit, "Alice Smith", "00010", dec!(5)));
        log.append_end_of_session();

        let written = log.flush(&path).unwrap();

        assert_eq!(written, 2);
        assert!(log.is_empty());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "04 Alice Smith          00010 00005.00 0\n00                      00000 00000.00 0\n"
        );
    }

    #[test]
    fn test_failed_flush_keeps_pending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("daily.txt");
        let mut log = TransactionLog::new();
        log.append_end_of_session();

        assert!(log.flush(&path).is_err());
        assert_eq!(log.len(), 1);
    }
}
