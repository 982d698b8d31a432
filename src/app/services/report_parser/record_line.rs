//! Data line tokenization, repair and field extraction
//!
//! Data rows are whitespace-separated columns read at fixed offsets from the
//! row end, because the number of leading columns varies between report
//! layouts. On wider tables the printed page number is sometimes wrapped
//! into the row as a spurious token, which is removed before extraction.

use super::super::metadata_registry::MetadataRegistry;
use crate::constants::{
    COURSE_ID_LEN, INJECTED_TOKEN_FROM_END, MIN_DATA_FIELDS, field_offsets, injected_page_token,
};

/// Outcome fields pulled from a repaired data row, still as raw tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCounts<'a> {
    /// Class identifier token
    pub class_id: &'a str,

    /// Total enrollment token
    pub total: &'a str,

    /// Approved count token
    pub approved: &'a str,

    /// Disapproved-on-grades count token
    pub disapproved_grade: &'a str,

    /// Disapproved-on-attendance count token
    pub disapproved_attendance: &'a str,
}

/// Course marker check: the first seven characters naming a known course
///
/// The slice is taken only when the first seven bytes fall on a character
/// boundary; registered course identifiers are seven ASCII characters, so a
/// line opening with multibyte text can never match one.
pub fn course_prefix<'a>(line: &'a str, registry: &MetadataRegistry) -> Option<&'a str> {
    line.get(..COURSE_ID_LEN)
        .filter(|prefix| registry.contains_course(prefix))
}

/// Tokenize a data line and drop a wrapped page number if present
///
/// The export prints the page number offset by a fixed amount, and on wide
/// tables that number lands ten tokens from the row end. The token is
/// removed only when it equals the expected value for the current page.
pub fn repair_fields(line: &str, page: u32) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() > INJECTED_TOKEN_FROM_END {
        let position = fields.len() - INJECTED_TOKEN_FROM_END;
        if fields[position] == injected_page_token(page) {
            fields.remove(position);
        }
    }

    fields
}

/// Extract the outcome fields at their fixed offsets from the row end
///
/// Returns `None` when the row is too short to carry the extraction window.
/// The offsets are the single point of change if the source layout varies.
pub fn extract_counts<'a>(fields: &[&'a str]) -> Option<RawCounts<'a>> {
    if fields.len() < MIN_DATA_FIELDS {
        return None;
    }

    let len = fields.len();
    Some(RawCounts {
        class_id: fields[len - field_offsets::CLASS_ID],
        total: fields[len - field_offsets::TOTAL],
        approved: fields[len - field_offsets::APPROVED],
        disapproved_grade: fields[len - field_offsets::DISAPPROVED_GRADE],
        disapproved_attendance: fields[len - field_offsets::DISAPPROVED_ATTENDANCE],
    })
}
