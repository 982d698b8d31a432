//! Command-line argument definitions for the riptide report parser
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the riptide report parser
///
/// Extracts per-class academic performance records from fixed-layout
/// plain-text report exports and writes them out for analysis.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "riptide",
    version,
    about = "Extract academic performance records from plain-text report exports",
    long_about = "Parses multi-page academic performance reports exported as fixed-layout \
                  plain text, recovering per-class approval and disapproval counts under \
                  their semester, program and course context. Malformed lines are logged \
                  and skipped; a run never aborts over a bad row."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the report parser
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a report export and write the extracted records (main command)
    Parse(ParseArgs),
    /// Inspect the metadata registry the parser validates against
    Metadata(MetadataArgs),
}

/// Arguments for the parse command (main record extraction)
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to the plain-text report export to parse
    #[arg(value_name = "REPORT", help = "Path to the report export file")]
    pub report: PathBuf,

    /// Path to the metadata registry document
    ///
    /// TOML document listing the known semester, program and course
    /// identifiers. If not specified, looks for ~/.config/riptide/metadata.toml
    #[arg(
        short = 'm',
        long = "metadata",
        value_name = "FILE",
        help = "Path to the metadata registry document (TOML format)"
    )]
    pub metadata: Option<PathBuf>,

    /// Output path for extracted records
    ///
    /// Parent directories are created if missing. If not specified, records
    /// go to a format-specific file in the working directory, or to stdout
    /// for the human format.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for extracted records"
    )]
    pub output: Option<PathBuf>,

    /// Output format for extracted records
    #[arg(
        long = "output-format",
        value_enum,
        value_name = "FORMAT",
        help = "Output format for extracted records"
    )]
    pub output_format: Option<OutputFormat>,

    /// Path to configuration file
    ///
    /// TOML configuration file for defaults. If not specified, looks for
    /// ~/.config/riptide/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Parse without writing any output file
    ///
    /// Runs the full extraction and reports statistics without exporting
    /// records. Useful for checking a report before committing to output.
    #[arg(
        long = "dry-run",
        help = "Parse and report statistics without writing output"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the metadata command (registry inspection)
#[derive(Debug, Clone, Parser)]
pub struct MetadataArgs {
    /// Path to the metadata registry document
    ///
    /// If not specified, uses the configured or default location.
    #[arg(
        short = 'm',
        long = "metadata",
        value_name = "FILE",
        help = "Path to the metadata registry document (TOML format)"
    )]
    pub metadata: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for extracted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table for terminals
    Human,
    /// CSV with a header row
    Csv,
    /// JSON lines for scripting
    Json,
}

impl OutputFormat {
    /// Name of the format as written in configuration files
    pub fn as_config_name(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.report.exists() {
            return Err(Error::file_not_found(self.report.display().to_string()));
        }

        if !self.report.is_file() {
            return Err(Error::configuration(format!(
                "Report path is not a file: {}",
                self.report.display()
            )));
        }

        // Validate metadata file exists if specified
        if let Some(metadata) = &self.metadata {
            if !metadata.exists() {
                return Err(Error::configuration(format!(
                    "Metadata file does not exist: {}",
                    metadata.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl MetadataArgs {
    /// Validate the metadata command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(metadata) = &self.metadata {
            if !metadata.exists() {
                return Err(Error::configuration(format!(
                    "Metadata file does not exist: {}",
                    metadata.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ParseArgs {
    fn default() -> Self {
        Self {
            report: PathBuf::new(),
            metadata: None,
            output: None,
            output_format: None,
            config_file: None,
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for MetadataArgs {
    fn default() -> Self {
        Self {
            metadata: None,
            config_file: None,
            verbose: 0,
        }
    }
}
