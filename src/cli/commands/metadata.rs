//! Metadata command implementation for the riptide CLI
//!
//! Loads the metadata registry the way the parse command would and prints
//! what it holds, so registry problems surface before a long parsing run.

use super::shared::{RunStats, setup_metadata_logging};
use crate::Result;
use crate::app::services::metadata_registry::MetadataRegistry;
use crate::cli::args::MetadataArgs;
use crate::config::Config;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Metadata command runner for the riptide CLI
pub fn run_metadata(args: MetadataArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_metadata_logging(&args)?;

    info!("Inspecting metadata registry");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    // Resolve the document path: CLI flag, then config file, then default
    let config = match &args.config_file {
        Some(path) => Config::from_file(path)?,
        None => match Config::default_config_path() {
            Ok(path) if path.exists() => Config::from_file(&path)?,
            _ => Config::default(),
        },
    };

    let metadata_path = match &args.metadata {
        Some(path) => path.clone(),
        None => config.metadata_path()?,
    };

    let (registry, load_stats) = MetadataRegistry::load_from_file(&metadata_path)?;

    println!("\n{}", "Metadata Registry".bright_green().bold());
    println!(
        "  {} {}",
        "Document:".bright_cyan(),
        metadata_path.display().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Semesters:".bright_cyan(),
        registry.semester_count().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Programs:".bright_cyan(),
        registry.program_count().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Courses:".bright_cyan(),
        registry.course_count().to_string().bright_white()
    );

    if load_stats.entries_rejected > 0 {
        println!(
            "  {} {}",
            "Rejected entries:".bright_red(),
            load_stats.entries_rejected.to_string().bright_red().bold()
        );
    }

    println!(
        "  {} {:.2}s",
        "Load time:".bright_cyan(),
        load_stats.load_duration.as_secs_f64()
    );
    println!();

    Ok(RunStats {
        metadata_loaded: load_stats.total_loaded(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}
