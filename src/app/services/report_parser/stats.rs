//! Parsing statistics and result structures for report processing
//!
//! This module provides types for tracking extraction outcomes, page
//! anomalies and row rejections across a parse pass.

use crate::app::models::Performance;

/// Eager parsing result with records and statistics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Successfully extracted performance records, in input order
    pub performances: Vec<Performance>,

    /// Statistics for the completed pass
    pub stats: ParseStats,
}

/// Statistics for one parse pass over a report
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of input lines consumed
    pub lines_read: usize,

    /// Number of page breaks consumed
    pub pages_completed: usize,

    /// Pages that ended without establishing a program context
    pub pages_unparsed: usize,

    /// Header lines whose identifier could not be extracted
    pub header_parse_errors: usize,

    /// Program headers encountered before any semester on their page
    pub programs_before_semester: usize,

    /// Semester identifiers absent from the metadata registry
    pub unknown_semester_ids: usize,

    /// Program identifiers absent from the metadata registry
    pub unknown_program_ids: usize,

    /// Number of records extracted and yielded
    pub records_extracted: usize,

    /// Rows skipped for carrying fewer fields than the extraction window
    pub rows_short: usize,

    /// Rows skipped for a total enrollment of zero
    pub rows_zero_enrollment: usize,

    /// Rows skipped for a class identifier of unexpected shape
    pub rows_unrecognized_class: usize,

    /// Rows skipped because the outcome counts do not add up
    pub rows_inconsistent: usize,

    /// Rows skipped for non-numeric count fields
    pub rows_malformed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of candidate rows rejected
    pub fn rows_skipped(&self) -> usize {
        self.rows_short
            + self.rows_zero_enrollment
            + self.rows_unrecognized_class
            + self.rows_inconsistent
            + self.rows_malformed
    }

    /// Whether any warning-level anomaly was seen during the pass
    pub fn has_anomalies(&self) -> bool {
        self.pages_unparsed > 0
            || self.header_parse_errors > 0
            || self.programs_before_semester > 0
            || self.unknown_semester_ids > 0
            || self.unknown_program_ids > 0
    }

    /// Get a summary string of the parse pass
    pub fn summary(&self) -> String {
        format!(
            "Read {} lines across {} page breaks, extracted {} records ({} rows skipped, {} pages unparsed)",
            self.lines_read,
            self.pages_completed,
            self.records_extracted,
            self.rows_skipped(),
            self.pages_unparsed
        )
    }
}
