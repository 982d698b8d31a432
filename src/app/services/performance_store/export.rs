//! Export writers for reconciled performance records
//!
//! Supports three output formats: a fixed-width table for terminals, CSV
//! with a header row, and JSON lines (one record per line). Records are
//! always written in key order, so repeated runs over the same report
//! produce identical files.

use crate::app::services::performance_store::PerformanceStore;
use crate::{Error, Result};

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Output format for exported records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Fixed-width table for reading in a terminal
    Human,

    /// CSV with a header row
    Csv,

    /// JSON lines, one record per line
    Json,
}

impl ExportFormat {
    /// Resolve a format from its configuration name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "human" => Ok(Self::Human),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(Error::configuration(format!(
                "Unknown output format '{}'. Valid formats: human, csv, json",
                other
            ))),
        }
    }

    /// Default file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Human => "txt",
            Self::Csv => "csv",
            Self::Json => "jsonl",
        }
    }
}

/// Write the store as CSV to the given path
///
/// Returns the number of bytes written.
pub fn write_csv(store: &PerformanceStore, path: &Path) -> Result<u64> {
    info!(
        "Exporting {} records as CSV to {}",
        store.len(),
        path.display()
    );

    let mut writer = csv::Writer::from_path(path)?;

    for record in store.records() {
        writer.serialize(record)?;
    }

    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush CSV export".to_string(), e))?;

    Ok(output_size(path))
}

/// Write the store as JSON lines to the given path
///
/// Returns the number of bytes written.
pub fn write_json(store: &PerformanceStore, path: &Path) -> Result<u64> {
    info!(
        "Exporting {} records as JSON lines to {}",
        store.len(),
        path.display()
    );

    let file = File::create(path).map_err(|e| {
        Error::io(
            format!("Failed to create output file: {}", path.display()),
            e,
        )
    })?;
    let mut writer = BufWriter::new(file);

    for record in store.records() {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
    }

    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush JSON export".to_string(), e))?;

    Ok(output_size(path))
}

/// Render the store as a fixed-width table
pub fn render_table(store: &PerformanceStore) -> String {
    let mut table = String::new();

    // Column widths accommodate the longest identifiers the layout produces
    let _ = writeln!(
        table,
        "{:<10} {:<10} {:<9} {:<8} {:>9} {:>13} {:>12}",
        "PROGRAM", "SEMESTER", "COURSE", "CLASS", "APPROVED", "FAILED_GRADE", "FAILED_ATT"
    );

    for record in store.records() {
        let _ = writeln!(
            table,
            "{:<10} {:<10} {:<9} {:<8} {:>9} {:>13} {:>12}",
            record.program_id,
            record.semester_id,
            record.course_id,
            record.class_id,
            record.approved,
            record.disapproved_grade,
            record.disapproved_attendance
        );
    }

    let _ = writeln!(table, "\n{} records", store.len());

    table
}

/// Write the store in the given format to the given path
///
/// Returns the number of bytes written. The human format writes the same
/// table [`render_table`] produces for terminals.
pub fn write_to_file(store: &PerformanceStore, format: ExportFormat, path: &Path) -> Result<u64> {
    match format {
        ExportFormat::Csv => write_csv(store, path),
        ExportFormat::Json => write_json(store, path),
        ExportFormat::Human => {
            info!(
                "Exporting {} records as a table to {}",
                store.len(),
                path.display()
            );

            std::fs::write(path, render_table(store)).map_err(|e| {
                Error::io(
                    format!("Failed to create output file: {}", path.display()),
                    e,
                )
            })?;

            Ok(output_size(path))
        }
    }
}

fn output_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
