//! Application constants for riptide
//!
//! This module contains the report layout markers, row offsets, default
//! values, and mappings used throughout the riptide application.

// =============================================================================
// Report Layout Markers
// =============================================================================

/// Page break control character emitted between report pages
pub const PAGE_BREAK_CHAR: char = '\u{000C}';

/// Header marker preceding the semester identifier
pub const SEMESTER_MARKER: &str = "Semestre -";

/// Header marker preceding the program identifier
pub const PROGRAM_MARKER: &str = "Curso:";

/// Course identifiers are exactly this many characters in the export
pub const COURSE_ID_LEN: usize = 7;

/// Page numbering in the export starts at 1
pub const FIRST_PAGE_NUMBER: u32 = 1;

// =============================================================================
// Data Row Layout
// =============================================================================

/// The printed page number exceeds the page counter by this amount
pub const PAGE_NUMBER_OFFSET: u32 = 13;

/// Position from the row end where a wrapped page number lands
pub const INJECTED_TOKEN_FROM_END: usize = 10;

/// Minimum field count for a row to carry the full extraction window
pub const MIN_DATA_FIELDS: usize = 21;

/// Field positions counted from the row end
pub mod field_offsets {
    /// Class identifier
    pub const CLASS_ID: usize = 21;

    /// Total enrollment
    pub const TOTAL: usize = 19;

    /// Students approved
    pub const APPROVED: usize = 18;

    /// Students disapproved on grades
    pub const DISAPPROVED_GRADE: usize = 16;

    /// Students disapproved on attendance
    pub const DISAPPROVED_ATTENDANCE: usize = 3;
}

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Configuration directory name under the user config root
pub const CONFIG_DIR_NAME: &str = "riptide";

/// Configuration filename
pub const CONFIG_FILENAME: &str = "config.toml";

/// Metadata document filename
pub const METADATA_FILENAME: &str = "metadata.toml";

/// Default stem for export files
pub const DEFAULT_OUTPUT_STEM: &str = "performance";

// =============================================================================
// Performance and Monitoring Constants
// =============================================================================

/// Progress reporting update interval (number of processed lines)
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;

// =============================================================================
// Helper Functions
// =============================================================================

/// Render the page number token as it appears when wrapped into a data row
pub fn injected_page_token(page: u32) -> String {
    (page + PAGE_NUMBER_OFFSET).to_string()
}

/// Get the expected export filename for a format extension
pub fn get_output_filename(extension: &str) -> String {
    format!("{}.{}", DEFAULT_OUTPUT_STEM, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injected_page_token() {
        assert_eq!(injected_page_token(1), "14");
        assert_eq!(injected_page_token(12), "25");
    }

    #[test]
    fn test_output_filenames() {
        assert_eq!(get_output_filename("csv"), "performance.csv");
        assert_eq!(get_output_filename("jsonl"), "performance.jsonl");
    }

    #[test]
    fn test_extraction_window_is_consistent() {
        // The class id sits at the window start and the attendance count
        // inside the trailing block, so a row must reach the window start.
        assert!(field_offsets::CLASS_ID <= MIN_DATA_FIELDS);
        assert!(field_offsets::DISAPPROVED_ATTENDANCE < field_offsets::DISAPPROVED_GRADE);
        assert!(field_offsets::DISAPPROVED_GRADE < field_offsets::APPROVED);
        assert!(field_offsets::APPROVED < field_offsets::TOTAL);
        assert!(field_offsets::TOTAL < field_offsets::CLASS_ID);
    }
}
