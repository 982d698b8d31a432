//! Command implementations for the riptide CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod metadata;
pub mod parse;
pub mod shared;

// Re-export the run statistics type used by every command
pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the riptide CLI
///
/// This function dispatches to the appropriate subcommand handler based on
/// CLI args. Each command is implemented in its own module:
/// - `parse`: report extraction workflow with record export
/// - `metadata`: metadata registry inspection
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Parse(parse_args) => parse::run_parse(parse_args),
        Commands::Metadata(metadata_args) => metadata::run_metadata(metadata_args),
    }
}
