//! Core report parser implementation
//!
//! This module provides the parser orchestration: line classification in
//! precedence order, page context updates, and the lazy record stream
//! yielded to the caller.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::context::PageContext;
use super::headers;
use super::record_line::{self, RawCounts};
use super::segmenter;
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::{self, Performance};
use crate::app::services::metadata_registry::MetadataRegistry;

/// Parser for academic performance report exports
///
/// The parser is error tolerant by design: malformed headers and rows are
/// logged and skipped, never fatal. A parse pass ends only when the input
/// lines are exhausted or the caller stops iterating.
#[derive(Debug)]
pub struct ReportParser {
    registry: Arc<MetadataRegistry>,
}

impl ReportParser {
    /// Create a new parser with metadata registry dependency
    pub fn new(registry: Arc<MetadataRegistry>) -> Self {
        Self { registry }
    }

    /// Lazily extract records from an ordered line stream
    ///
    /// The returned stream is single pass: records come out in input order,
    /// and the underlying lines are advanced exactly as far as needed to
    /// produce the next record.
    pub fn records<I>(&self, lines: I) -> RecordStream<I>
    where
        I: Iterator<Item = String>,
    {
        RecordStream {
            lines,
            registry: Arc::clone(&self.registry),
            context: PageContext::new(),
            stats: ParseStats::new(),
        }
    }

    /// Parse a full line stream eagerly, returning records and statistics
    pub fn parse_lines<I>(&self, lines: I) -> ParseOutcome
    where
        I: Iterator<Item = String>,
    {
        let mut stream = self.records(lines);
        let performances: Vec<Performance> = stream.by_ref().collect();

        info!("{}", stream.stats().summary());

        ParseOutcome {
            performances,
            stats: stream.into_stats(),
        }
    }
}

/// Lazy stream of validated performance records
///
/// Owns the page context and statistics for one parse pass. Dropping the
/// stream early leaves no shared state behind; it cannot be restarted.
#[derive(Debug)]
pub struct RecordStream<I> {
    lines: I,
    registry: Arc<MetadataRegistry>,
    context: PageContext,
    stats: ParseStats,
}

impl<I> RecordStream<I> {
    /// Statistics collected so far
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Consume the stream, returning the final statistics
    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    /// The page context as of the last consumed line
    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// Number of the page currently being read
    pub fn pages_seen(&self) -> u32 {
        self.context.page
    }
}

impl<I> RecordStream<I>
where
    I: Iterator<Item = String>,
{
    /// Classify one line and extract a record from it if possible
    fn process_line(&mut self, line: &str) -> Option<Performance> {
        // Page breaks run before any other classification
        if segmenter::handle_page_break(line, &mut self.context, &mut self.stats) {
            return None;
        }

        if headers::is_semester_header(line) {
            self.handle_semester_header(line);
            return None;
        }

        if headers::is_program_header(line) {
            self.handle_program_header(line);
            return None;
        }

        // A course marker does not consume the line: the same line can
        // carry the first data row for that course.
        let course_marker = record_line::course_prefix(line, &self.registry);
        if let Some(course) = course_marker {
            self.context.course_id = Some(course.to_string());
        }

        // Data rows only count once the page context is complete
        let (semester_id, program_id, course_id) = self.context.snapshot()?;
        let page = self.context.page;

        let fields = record_line::repair_fields(line, page);
        let raw = match record_line::extract_counts(&fields) {
            Some(raw) => raw,
            None => {
                // Bare course markers carry no data row and are not short
                if !fields.is_empty() && course_marker.is_none() {
                    debug!("Row with {} fields on page {} is too short", fields.len(), page);
                    self.stats.rows_short += 1;
                }
                return None;
            }
        };

        // Zero enrollment is suppressed before any further validation
        if raw.total == "0" {
            debug!(
                "Zero-enrollment row for class {} on page {}",
                raw.class_id, page
            );
            self.stats.rows_zero_enrollment += 1;
            return None;
        }

        if !models::is_valid_class_id(raw.class_id) {
            debug!("Unrecognized class id {}", raw.class_id);
            self.stats.rows_unrecognized_class += 1;
            return None;
        }

        let Some((total, approved, disapproved_grade, disapproved_attendance)) =
            parse_counts(&raw)
        else {
            debug!("Non-numeric count fields on page {}", page);
            self.stats.rows_malformed += 1;
            return None;
        };

        if u64::from(total) != u64::from(approved) + u64::from(disapproved_grade) {
            debug!(
                "{}@{} p{} has inconsistent totals",
                course_id, program_id, page
            );
            self.stats.rows_inconsistent += 1;
            return None;
        }

        let program: u32 = match program_id.parse() {
            Ok(id) => id,
            Err(_) => {
                debug!("Program id {} does not fit a numeric id", program_id);
                self.stats.rows_malformed += 1;
                return None;
            }
        };

        match Performance::new(
            raw.class_id.to_string(),
            semester_id,
            program,
            course_id,
            approved,
            disapproved_grade,
            disapproved_attendance,
        ) {
            Ok(record) => {
                self.stats.records_extracted += 1;
                Some(record)
            }
            Err(e) => {
                debug!("Dropping row on page {}: {}", page, e);
                self.stats.rows_malformed += 1;
                None
            }
        }
    }

    /// Adopt the semester declared by a header line
    ///
    /// An identifier missing from the registry is adopted with a warning:
    /// the document is trusted over the reference table, which may lag.
    fn handle_semester_header(&mut self, line: &str) {
        match headers::extract_semester_id(line) {
            Some(id) => {
                if !self.registry.contains_semester(id) {
                    warn!("Semester ID not found: {}", id);
                    self.stats.unknown_semester_ids += 1;
                }
                self.context.semester_id = Some(id.to_string());
            }
            None => {
                warn!(
                    "Semester ID parse error on page {}: {}",
                    self.context.page,
                    line.trim()
                );
                self.stats.header_parse_errors += 1;
            }
        }
    }

    /// Adopt the program declared by a header line
    ///
    /// A program declaration is only meaningful under a semester; out of
    /// order headers are discarded with a warning.
    fn handle_program_header(&mut self, line: &str) {
        if self.context.semester_id.is_none() {
            warn!(
                "Found program ID before semester on page {}",
                self.context.page
            );
            self.stats.programs_before_semester += 1;
            return;
        }

        match headers::extract_program_id(line) {
            Some(id) => {
                if !self.registry.contains_program(id) {
                    warn!("Program ID not found: {}", id);
                    self.stats.unknown_program_ids += 1;
                }
                self.context.program_id = Some(id.to_string());
            }
            None => {
                warn!(
                    "Program ID parse error on page {}: {}",
                    self.context.page,
                    line.trim()
                );
                self.stats.header_parse_errors += 1;
            }
        }
    }
}

impl<I> Iterator for RecordStream<I>
where
    I: Iterator<Item = String>,
{
    type Item = Performance;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.stats.lines_read += 1;

            if let Some(record) = self.process_line(&line) {
                return Some(record);
            }
        }
    }
}

/// Parse the four count tokens, rejecting the row if any is non-numeric
fn parse_counts(raw: &RawCounts) -> Option<(u32, u32, u32, u32)> {
    let total = raw.total.parse().ok()?;
    let approved = raw.approved.parse().ok()?;
    let disapproved_grade = raw.disapproved_grade.parse().ok()?;
    let disapproved_attendance = raw.disapproved_attendance.parse().ok()?;
    Some((total, approved, disapproved_grade, disapproved_attendance))
}
