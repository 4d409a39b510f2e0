//! Session runner
//!
//! Wires the command reader to the transaction engine and prints one line per
//! command to the terminal output.
//!
//! # Design
//!
//! The runner only orchestrates, delegating:
//! - Input parsing to `CommandReader` (iterator interface)
//! - Authorization to `TransactionEngine` (business rules)
//! - File output to the engine's transaction log (at logout)
//!
//! Rejected commands are reported and processing continues with the next
//! command. Fatal errors stop the run and are returned to the caller.

use crate::config::FrontEndConfig;
use crate::core::TransactionEngine;
use crate::io::CommandReader;
use crate::types::FrontEndError;
use std::io::{BufRead, Write};

/// First line printed by every run
pub const WELCOME: &str = "Welcome to the Banking System.";

/// Process every command from `input` until it is exhausted
///
/// # Arguments
///
/// * `config` - Locations of the account master file and daily transaction file
/// * `input` - Line-oriented command stream
/// * `output` - Terminal output receiving one outcome line per command
///
/// # Returns
///
/// * `Ok(())` once the input is exhausted
/// * `Err(FrontEndError)` on the first fatal error
///
/// # Errors
///
/// Returns an error if:
/// - The account master file cannot be read or is malformed (at login)
/// - The daily transaction file cannot be written (at logout)
/// - The input or output stream fails
pub fn run<R: BufRead>(
    config: FrontEndConfig,
    input: R,
    output: &mut dyn Write,
) -> Result<(), FrontEndError> {
    let mut engine = TransactionEngine::new(config);
    writeln!(output, "{}", WELCOME)?;

    for result in CommandReader::new(input) {
        match result.and_then(|command| engine.process(command)) {
            Ok(outcome) => writeln!(output, "{}", outcome)?,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "command rejected");
                writeln!(output, "Error: {}", e)?;
            }
        }
    }

    if engine.session().is_logged_in() {
        tracing::warn!(
            pending = engine.pending().len(),
            "input ended without logout, pending transactions were not written"
        );
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const ACCOUNTS: &str = "\
00010 Alice Smith          A  0250.00
00000 END_OF_FILE          A  0000.00
";

    fn setup() -> (TempDir, FrontEndConfig) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let accounts = dir.path().join("accounts.txt");
        fs::write(&accounts, ACCOUNTS).expect("Failed to write accounts");
        let config = FrontEndConfig::new(accounts, dir.path().join("daily.txt"));
        (dir, config)
    }

    fn run_session(config: FrontEndConfig, input: &str) -> (Result<(), FrontEndError>, String) {
        let mut output = Vec::new();
        let result = run(config, Cursor::new(input.to_string()), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_session_transcript() {
        let (dir, config) = setup();
        let input = "login\nstandard\nAlice Smith\nwithdrawal\n00010\n100.00\nwithdrawal\n00010\n600.00\nlogout\n";

        let (result, transcript) = run_session(config, input);

        assert!(result.is_ok());
        let lines: Vec<_> = transcript.lines().collect();
        assert_eq!(lines[0], WELCOME);
        assert_eq!(lines[1], "Accepted standard login.");
        assert_eq!(lines[2], "Withdrawal successful.");
        assert!(lines[3].starts_with("Error: Invalid amount '600.00'"));
        assert_eq!(lines[4], "Session terminated.");

        let daily = fs::read_to_string(dir.path().join("daily.txt")).unwrap();
        assert_eq!(
            daily,
            "01 Alice Smith          00010 00100.00 0\n00                      00000 00000.00 0\n"
        );
    }

    #[test]
    fn test_rejected_privileged_command_keeps_stream_aligned() {
        let (dir, config) = setup();
        let input = "login\nstandard\nAlice Smith\ndisable\nAlice Smith\n00010\nlogout\n";

        let (result, transcript) = run_session(config, input);

        assert!(result.is_ok());
        let lines: Vec<_> = transcript.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Error: Privileged transaction 'disable'"));
        assert_eq!(lines[3], "Session terminated.");

        let daily = fs::read_to_string(dir.path().join("daily.txt")).unwrap();
        assert_eq!(daily.lines().count(), 1);
    }

    #[test]
    fn test_unknown_command_is_reported_and_skipped() {
        let (_dir, config) = setup();

        let (result, transcript) = run_session(config, "balance\nlogout\n");

        assert!(result.is_ok());
        let lines: Vec<_> = transcript.lines().collect();
        assert_eq!(lines[1], "Error: Invalid transaction code: balance");
        assert!(lines[2].starts_with("Error: No transaction other than login"));
    }

    #[test]
    fn test_invalid_utf8_argument_rejects_only_that_command() {
        let (dir, config) = setup();
        let input: &[u8] =
            b"login\nstandard\nAlice Smith\nwithdrawal\n00010\n1\xff0.00\nlogout\n";
        let mut output = Vec::new();

        let result = run(config, input, &mut output);

        assert!(result.is_ok());
        let transcript = String::from_utf8(output).unwrap();
        let lines: Vec<_> = transcript.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Error: Invalid amount"));
        assert_eq!(lines[3], "Session terminated.");

        let daily = fs::read_to_string(dir.path().join("daily.txt")).unwrap();
        assert_eq!(daily, "00                      00000 00000.00 0\n");
    }

    #[test]
    fn test_missing_account_file_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = FrontEndConfig::new(dir.path().join("missing.txt"), dir.path().join("d.txt"));

        let (result, transcript) = run_session(config, "login\nadmin\n\nlogout\n");

        assert!(matches!(result, Err(FrontEndError::FileNotFound { .. })));
        assert_eq!(transcript.lines().count(), 1);
    }

    #[test]
    fn test_input_ending_while_logged_in_writes_nothing() {
        let (dir, config) = setup();

        let (result, _) = run_session(config, "login\nadmin\nAdmin\ncreate\nNew User\n5.00\n");

        assert!(result.is_ok());
        assert!(!dir.path().join("daily.txt").exists());
    }
}
