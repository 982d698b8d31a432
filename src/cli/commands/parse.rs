//! Parse command implementation for the riptide CLI
//!
//! This module contains the complete extraction workflow: configuration
//! loading, metadata registry setup, streaming record extraction,
//! reconciliation and export.

use super::shared::{RunStats, create_spinner, load_configuration, setup_logging};
use crate::app::services::metadata_registry::MetadataRegistry;
use crate::app::services::performance_store::{ExportFormat, PerformanceStore, export};
use crate::app::services::report_parser::{ParseStats, ReportParser};
use crate::cli::args::ParseArgs;
use crate::config::Config;
use crate::constants::{PROGRESS_UPDATE_INTERVAL, get_output_filename};
use crate::{Error, Result};
use colored::*;
use indicatif::HumanDuration;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Parse command runner for the riptide CLI
///
/// This function orchestrates the entire extraction workflow:
/// 1. Set up logging and configuration
/// 2. Load the metadata registry
/// 3. Stream the report through the parser into the store
/// 4. Export reconciled records and report statistics
pub fn run_parse(args: ParseArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting report parsing");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    // Load the metadata registry the parser validates against
    let metadata_path = config.metadata_path()?;
    let (registry, load_stats) = MetadataRegistry::load_from_file(&metadata_path)?;
    info!("{}", registry.summary());

    // Stream the report through the parser
    let (store, parse_stats) = extract_records(&args, registry)?;

    // Export reconciled records
    let output_sizes = if args.dry_run {
        info!("Dry run: skipping export of {} records", store.len());
        Vec::new()
    } else {
        export_records(&config, &store)?
    };

    let stats = RunStats {
        lines_read: parse_stats.lines_read,
        pages_completed: parse_stats.pages_completed,
        pages_unparsed: parse_stats.pages_unparsed,
        records_extracted: parse_stats.records_extracted,
        records_stored: store.len(),
        rows_skipped: parse_stats.rows_skipped(),
        metadata_loaded: load_stats.total_loaded(),
        processing_time: start_time.elapsed(),
        output_sizes,
    };

    // Generate final report
    generate_final_report(&args, &stats);

    Ok(stats)
}

/// Stream report lines through the parser, reconciling records as they come
fn extract_records(
    args: &ParseArgs,
    registry: MetadataRegistry,
) -> Result<(PerformanceStore, ParseStats)> {
    info!("Parsing report: {}", args.report.display());

    let file = File::open(&args.report).map_err(|e| {
        Error::io(
            format!("Failed to open report '{}'", args.report.display()),
            e,
        )
    })?;
    let reader = BufReader::new(file);

    // A line that cannot be decoded ends the pass; everything read so far
    // still counts
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            warn!("Stopped reading report: {}", e);
            None
        }
    });

    let parser = ReportParser::new(Arc::new(registry));
    let mut stream = parser.records(lines);
    let mut store = PerformanceStore::new();

    let spinner = if args.show_progress() {
        Some(create_spinner("Parsing report..."))
    } else {
        None
    };

    for record in stream.by_ref() {
        store.upsert(record);

        if let Some(pb) = &spinner {
            let upserts = store.stats().total_upserts();
            if upserts % PROGRESS_UPDATE_INTERVAL == 0 {
                pb.set_message(format!("Extracted {} records...", upserts));
            }
        }
    }

    let parse_stats = stream.into_stats();
    info!("{}", parse_stats.summary());

    if let Some(pb) = &spinner {
        pb.finish_with_message(parse_stats.summary());
    }

    Ok((store, parse_stats))
}

/// Write the store in the configured format to the configured destination
fn export_records(config: &Config, store: &PerformanceStore) -> Result<Vec<(String, u64)>> {
    let format = ExportFormat::from_name(&config.output.format)?;

    // The human format prints to stdout unless an output path was given
    if format == ExportFormat::Human && config.output.path.is_none() {
        println!("{}", export::render_table(store));
        return Ok(Vec::new());
    }

    config.ensure_output_directory()?;

    let path = match &config.output.path {
        Some(path) => path.clone(),
        None => PathBuf::from(get_output_filename(format.extension())),
    };

    let bytes_written = export::write_to_file(store, format, &path)?;
    info!("Wrote {} records to {}", store.len(), path.display());

    Ok(vec![(path.display().to_string(), bytes_written)])
}

/// Print the run summary for interactive use
fn generate_final_report(args: &ParseArgs, stats: &RunStats) {
    if args.quiet {
        return;
    }

    println!("\n{}", "Report Parsing Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        stats.lines_read.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Pages completed:".bright_cyan(),
        stats.pages_completed.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Records extracted:".bright_cyan(),
        stats.records_extracted.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Offerings stored:".bright_cyan(),
        stats.records_stored.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Rows skipped:".bright_cyan(),
        stats.rows_skipped.to_string().bright_white()
    );

    if stats.pages_unparsed > 0 {
        println!(
            "  {} {}",
            "Pages unparsed:".bright_red(),
            stats.pages_unparsed.to_string().bright_red().bold()
        );
    }

    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(stats.processing_time).to_string().bright_white()
    );

    if !stats.output_sizes.is_empty() {
        println!("\n{}", "Output Files".bright_green().bold());
        for (filename, size) in &stats.output_sizes {
            println!(
                "  {} ({})",
                filename.bright_white(),
                RunStats::format_size(*size)
            );
        }
    }

    println!();
}
