//! Test utilities for performance store testing

use crate::app::models::Performance;


/// Helper to build a valid performance record
pub fn make_performance(
    class_id: &str,
    semester_id: &str,
    program_id: u32,
    course_id: &str,
    approved: u32,
    disapproved_grade: u32,
    disapproved_attendance: u32,
) -> Performance {
    Performance::new(
        class_id.to_string(),
        semester_id.to_string(),
        program_id,
        course_id.to_string(),
        approved,
        disapproved_grade,
        disapproved_attendance,
    )
    .unwrap()
}

/// A record with typical values for single-record tests
pub fn sample_performance() -> Performance {
    make_performance("10234A", "2023.1", 101, "DCC1001", 25, 5, 2)
}
