//! recordset CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, and reports errors as a
//! JSON error response with a non-zero exit code.

use recordset::cli;

fn main() {
    if let Err(e) = cli::run() {
        let _ = cli::write_error(e.code_str(), &e.to_string());
        std::process::exit(1);
    }
}
