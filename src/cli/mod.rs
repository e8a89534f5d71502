//! CLI module
//!
//! Provides command-line interface for:
//! - validate: check records from a file or stdin
//! - frame: render an ICP's semantic frame
//! - types: list entity discriminants
//! - schema: print an entity's schema

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{frame, run_command, schema, types, validate, validate_records};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{parse_records, parse_single, read_input, write_json, write_line};

/// Parse the process arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
