//! Daily transaction file encoding
//!
//! Every approved transaction becomes one 40-character line:
//!
//! ```text
//! CC AAAAAAAAAAAAAAAAAAAA NNNNN PPPPPPPP MM
//! ```
//!
//! The assembled fields are one character wider than the record, so the
//! line is cut at 40 characters and only the first character of `MM`
//! survives. Downstream batch processing reads exactly 40 columns.

use crate::types::{FrontEndError, Transaction};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of every record in the daily transaction file
pub const RECORD_WIDTH: usize = 40;

const NAME_WIDTH: usize = 20;
const ACCOUNT_WIDTH: usize = 5;
const AMOUNT_WIDTH: usize = 8;

/// Encode a transaction as a fixed-width record
///
/// The name is left-justified and cut to 20 characters, the account number
/// zero-padded to 5, the amount zero-padded to 8 with 2 decimals. The result
/// is always exactly [`RECORD_WIDTH`] characters, without a line terminator.
pub fn encode_transaction(tx: &Transaction) -> String {
    let name: String = tx.name.chars().take(NAME_WIDTH).collect();
    let amount = format!("{:.2}", tx.amount);

    let line = format!(
        "{} {:<name_w$} {:0>acct_w$} {:0>amt_w$} {}",
        tx.code,
        name,
        tx.account_number,
        amount,
        tx.misc,
        name_w = NAME_WIDTH,
        acct_w = ACCOUNT_WIDTH,
        amt_w = AMOUNT_WIDTH,
    );

    fit_width(&line, RECORD_WIDTH)
}

/// Cut or space-pad `line` to exactly `width` characters
fn fit_width(line: &str, width: usize) -> String {
    let mut fitted: String = line.chars().take(width).collect();
    let missing = width - fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(missing));
    fitted
}

/// Write transactions as newline-terminated records
///
/// # Errors
///
/// Returns `Io` if the output cannot be written.
pub fn write_transactions(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), FrontEndError> {
    for tx in transactions {
        writeln!(output, "{}", encode_transaction(tx))?;
    }
    output.flush()?;
    Ok(())
}

/// Append transactions to the daily transaction file
///
/// Creates the file if it does not exist.
///
/// # Errors
///
/// Returns `FileNotFound` if the parent directory is missing, `Io` for any
/// other failure.
pub fn append_transactions(path: &Path, transactions: &[Transaction]) -> Result<(), FrontEndError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FrontEndError::from_io(e, path))?;

    let mut writer = BufWriter::new(file);
    write_transactions(transactions, &mut writer)
}
