//! CLI module for recordset
//!
//! Provides command-line glue for loading a JSON array of records from a
//! file and inspecting it:
//! - page: one page of records with the cursor
//! - get: a single record
//! - count: number of records accepted

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{count, get, page, run_command};
pub use errors::{CliError, CliResult};
pub use io::{read_records, write_error, write_response};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
