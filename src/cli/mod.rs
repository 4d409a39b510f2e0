//! Command-line interface
//!
//! Argument parsing and logging setup for the binary.

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// `--help`), clap displays an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber at the level chosen by `-v`
///
/// Stdout is reserved for the terminal transcript.
pub fn init_logging(args: &CliArgs) {
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
