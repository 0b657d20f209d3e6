//! CLI argument definitions using clap
//!
//! Commands:
//! - recordset page --input <path> [--size N] [--page N]
//! - recordset get --input <path> --index N
//! - recordset count --input <path>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// recordset - validate and page through JSON record arrays
#[derive(Parser, Debug)]
#[command(name = "recordset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where records come from and how they are validated
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON file holding an array of records
    #[arg(long)]
    pub input: PathBuf,

    /// Path to a collection configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Required keys, comma separated (overrides the config file)
    #[arg(long, value_delimiter = ',')]
    pub schema: Option<Vec<String>>,

    /// Reject records whose keys differ from the schema
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of records with its cursor
    Page {
        #[command(flatten)]
        source: SourceArgs,

        /// Records per page (non-numeric or non-positive values use 5)
        #[arg(long)]
        size: Option<String>,

        /// 1-based page number, clamped into range
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },

    /// Print the record at a zero-based index
    Get {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long)]
        index: usize,
    },

    /// Print the number of records
    Count {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
