//! Fixed-width account master file parsing
//!
//! Each line of the master file holds one account:
//!
//! ```text
//! 0         1         2         3
//! 0123456789012345678901234567890123456
//! 00010 Alice Smith          A  0250.00
//! ```
//!
//! | Range     | Field                                |
//! |-----------|--------------------------------------|
//! | `[0,5)`   | account number (5 digits)            |
//! | `[6,26)`  | holder name, space padded            |
//! | `[27]`    | status code (`A` or `D`)             |
//! | `[29,37)` | balance, 8-char decimal              |
//!
//! Reading stops at the first line containing `END_OF_FILE`.
//!
//! Parsing is pure (works on any `BufRead`); only [`load_accounts`] touches
//! the filesystem.

use crate::core::validator::MAX_AMOUNT;
use crate::types::{Account, AccountNumber, AccountStatus, FrontEndError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Token marking the end of the account records
pub const END_OF_FILE: &str = "END_OF_FILE";

const NUMBER: (usize, usize) = (0, 5);
const HOLDER: (usize, usize) = (6, 26);
const STATUS: usize = 27;
const BALANCE: (usize, usize) = (29, 37);

/// Parse one account line
///
/// # Arguments
///
/// * `line` - The raw line, without its line terminator
/// * `line_no` - 1-based line number, used in error messages
///
/// # Errors
///
/// Returns `MalformedRecord` if any field does not fit the layout.
pub fn parse_account_line(line: &str, line_no: usize) -> Result<Account, FrontEndError> {
    let malformed = |reason: String| FrontEndError::malformed_record(line_no, reason);

    // Columns are character positions, not byte offsets.
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= BALANCE.0 {
        return Err(malformed(format!(
            "record is {} characters, expected {}",
            chars.len(),
            BALANCE.1
        )));
    }

    let number = field(&chars, NUMBER);
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed("account number must be 5 digits".to_string()));
    }

    let holder = field(&chars, HOLDER);
    let holder = holder.trim();

    let status_code = chars[STATUS];
    let status = AccountStatus::from_code(status_code)
        .ok_or_else(|| malformed(format!("unknown status code '{}'", status_code)))?;

    let balance_field = field(&chars, BALANCE);
    let balance_field = balance_field.trim();
    let balance = Decimal::from_str(balance_field)
        .map_err(|_| malformed(format!("balance '{}' is not numeric", balance_field)))?;
    if balance < Decimal::ZERO || balance > MAX_AMOUNT {
        return Err(malformed(format!("balance {} is out of range", balance)));
    }

    Ok(Account::new(number, holder, status, balance))
}

/// Characters in `[start, end)`, clipped to the end of the line
fn field(chars: &[char], (start, end): (usize, usize)) -> String {
    chars[start.min(chars.len())..end.min(chars.len())]
        .iter()
        .collect()
}

/// Parse all account records from a reader
///
/// Blank lines are skipped. A missing `END_OF_FILE` sentinel is accepted.
///
/// # Returns
///
/// The accounts keyed by account number, and whether the sentinel was seen.
///
/// # Errors
///
/// - `MalformedRecord` for a line that does not fit the layout, or a repeated
///   account number
/// - `Io` if reading fails
pub fn parse_accounts<R: BufRead>(
    reader: R,
) -> Result<(HashMap<AccountNumber, Account>, bool), FrontEndError> {
    let mut accounts = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        if line.contains(END_OF_FILE) {
            return Ok((accounts, true));
        }

        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let account = parse_account_line(line, line_no)?;
        if accounts.contains_key(&account.number) {
            return Err(FrontEndError::malformed_record(
                line_no,
                format!("duplicate account number {}", account.number),
            ));
        }
        accounts.insert(account.number.clone(), account);
    }

    Ok((accounts, false))
}

/// Read the account master file at `path`
///
/// # Errors
///
/// - `FileNotFound` if the file does not exist
/// - `Io` if it cannot be read
/// - `MalformedRecord` for any line that does not fit the layout
pub fn load_accounts(path: &Path) -> Result<HashMap<AccountNumber, Account>, FrontEndError> {
    let file = File::open(path).map_err(|e| FrontEndError::from_io(e, path))?;
    let (accounts, terminated) = parse_accounts(BufReader::new(file))?;

    if !terminated {
        tracing::warn!(path = %path.display(), "account file has no {} marker", END_OF_FILE);
    }
    tracing::debug!(path = %path.display(), count = accounts.len(), "parsed account file");

    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const ALICE: &str = "00010 Alice Smith          A  0250.00";

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_parse_account_line() {
        let account = parse_account_line(ALICE, 1).unwrap();

        assert_eq!(account.number, "00010");
        assert_eq!(account.holder, "Alice Smith");
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.balance, dec!(250.00));
    }

    #[test]
    fn test_parse_account_line_disabled_full_width_name() {
        let line = "00042 ABCDEFGHIJKLMNOPQRST D 99999.99";
        let account = parse_account_line(line, 1).unwrap();

        assert_eq!(account.holder, "ABCDEFGHIJKLMNOPQRST");
        assert_eq!(account.status, AccountStatus::Disabled);
        assert_eq!(account.balance, dec!(99999.99));
    }

    #[rstest]
    #[case::too_short("00010 Alice", "characters")]
    #[case::letters_in_number("0A010 Alice Smith          A  0250.00", "5 digits")]
    #[case::status_shifted("00010 Alice Smith         A   0250.00", "status code")]
    #[case::unknown_status("00010 Alice Smith          X  0250.00", "status code 'X'")]
    #[case::non_numeric_balance("00010 Alice Smith          A  02x0.00", "not numeric")]
    #[case::negative_balance("00010 Alice Smith          A -0250.00", "out of range")]
    fn test_parse_account_line_malformed(#[case] line: &str, #[case] expected: &str) {
        match parse_account_line(line, 7) {
            Err(FrontEndError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 7);
                assert!(
                    reason.contains(expected),
                    "reason '{}' should mention '{}'",
                    reason,
                    expected
                );
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_account_line_non_ascii_holder() {
        let line = format!("00010 {:<20} A  0250.00", "José Smith");
        let account = parse_account_line(&line, 1).unwrap();

        assert_eq!(account.holder, "José Smith");
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.balance, dec!(250.00));
    }

    #[test]
    fn test_parse_accounts_stops_at_sentinel() {
        let content = format!(
            "{}\n00020 Bob Jones            D  0010.00\n00000 END_OF_FILE          A  0000.00\ngarbage after end\n",
            ALICE
        );
        let (accounts, terminated) = parse_accounts(Cursor::new(content)).unwrap();

        assert!(terminated);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts["00020"].holder, "Bob Jones");
        assert!(!accounts.contains_key("00000"));
    }

    #[test]
    fn test_parse_accounts_skips_blank_lines_and_crlf() {
        let content = format!("\r\n{}\r\n\nEND_OF_FILE\r\n", ALICE);
        let (accounts, terminated) = parse_accounts(Cursor::new(content)).unwrap();

        assert!(terminated);
        assert_eq!(accounts["00010"].balance, dec!(250.00));
    }

    #[test]
    fn test_parse_accounts_without_sentinel() {
        let (accounts, terminated) = parse_accounts(Cursor::new(ALICE)).unwrap();

        assert!(!terminated);
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn test_parse_accounts_rejects_duplicate_number() {
        let content = format!("{}\n{}\nEND_OF_FILE\n", ALICE, ALICE);
        let result = parse_accounts(Cursor::new(content));

        assert!(matches!(
            result,
            Err(FrontEndError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_accounts_from_file() {
        let file = create_temp_file(&format!("{}\nEND_OF_FILE\n", ALICE));
        let accounts = load_accounts(file.path()).unwrap();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts["00010"].holder, "Alice Smith");
    }

    #[test]
    fn test_load_accounts_missing_file() {
        let result = load_accounts(Path::new("nonexistent_accounts.txt"));
        assert_eq!(
            result,
            Err(FrontEndError::FileNotFound {
                path: "nonexistent_accounts.txt".to_string()
            })
        );
    }
}
