//! Banking Front End CLI
//!
//! Terminal front end that reads line-oriented banking commands, validates
//! them and appends approved transactions to the daily transaction file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.txt daily_transactions.txt < session.in
//! cargo run -- accounts.txt daily_transactions.txt session.in
//! cargo run -- -vv accounts.txt daily_transactions.txt session.in
//! ```
//!
//! The terminal transcript (outcome of every command) goes to stdout, logs
//! go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Input exhausted
//! - 1: Fatal error (account file missing or malformed, daily file not writable, etc.)

use banking_frontend::{app, cli, FrontEndError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    let config = args.to_config();

    let input: Box<dyn BufRead> = match &args.input_file {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Error: {}", FrontEndError::from_io(e, path));
                process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut output = io::stdout().lock();
    if let Err(e) = app::run(config, input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
