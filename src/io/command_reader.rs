//! Line-oriented command reader with iterator interface
//!
//! Input is one token per line: a command name followed by exactly
//! [`CommandKind::arity`] argument lines. The reader consumes the whole
//! argument block before anything is validated, so a rejected command never
//! leaves its arguments behind to be misread as the next command.
//!
//! ```no_run
//! use banking_frontend::io::CommandReader;
//! use std::io::BufReader;
//!
//! let reader = CommandReader::new(BufReader::new(std::io::stdin()));
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Unknown command names yield `UnknownCommand`; no further lines are consumed
//! - Input ending inside an argument block yields `MissingArgument`
//! - Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so the
//!   command is rejected by validation rather than ending the run
//! - Read failures yield `Io`

use crate::types::{Command, CommandKind, FrontEndError};
use std::io::BufRead;

/// Streaming reader turning input lines into commands
#[derive(Debug)]
pub struct CommandReader<R> {
    input: R,
    buf: Vec<u8>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
        }
    }

    /// Next raw line without its terminator, `None` at end of input
    fn next_line(&mut self) -> Option<Result<String, FrontEndError>> {
        self.buf.clear();
        match self.input.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&self.buf);
                Some(Ok(line.trim_end_matches(['\n', '\r']).to_string()))
            }
            Err(e) => Some(Err(e.into())),
        }
    }

    /// Read the argument block of `kind`, trimming every line
    fn read_arguments(&mut self, kind: CommandKind) -> Result<Vec<String>, FrontEndError> {
        let mut args = Vec::with_capacity(kind.arity());
        for field in kind.fields() {
            match self.next_line() {
                Some(line) => args.push(line?.trim().to_string()),
                None => return Err(FrontEndError::missing_argument(kind.name(), field)),
            }
        }
        Ok(args)
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, FrontEndError>;

    /// Get the next command
    ///
    /// Blank lines between commands are skipped.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Command))` - A complete command with all its arguments
    /// * `Some(Err(FrontEndError))` - Unknown command, truncated input or read error
    /// * `None` - End of input
    fn next(&mut self) -> Option<Self::Item> {
        let name = loop {
            match self.next_line()? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => break line.trim().to_string(),
                Err(e) => return Some(Err(e.into())),
            }
        };

        let Some(kind) = CommandKind::from_name(&name) else {
            return Some(Err(FrontEndError::unknown_command(&name)));
        };

        let command = self.read_arguments(kind).and_then(|args| {
            Command::from_parts(kind, args)
                .ok_or_else(|| FrontEndError::missing_argument(kind.name(), "arguments"))
        });
        Some(command)
    }
}
