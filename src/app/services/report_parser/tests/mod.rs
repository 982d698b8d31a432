//! Test utilities and fixtures for report parser testing
//!
//! This module provides the shared metadata registry and line builders used
//! across the parser test modules. Data row builders place the outcome
//! fields at the offsets the extraction window expects.

use std::sync::Arc;

use crate::app::services::metadata_registry::MetadataRegistry;
use crate::constants::{
    INJECTED_TOKEN_FROM_END, MIN_DATA_FIELDS, PAGE_BREAK_CHAR, PROGRAM_MARKER, SEMESTER_MARKER,
    injected_page_token,
};

// Test modules
mod context_tests;

/// Registry carrying the semesters, programs and courses the fixtures use
pub fn create_test_registry() -> Arc<MetadataRegistry> {
    Arc::new(MetadataRegistry::from_sets(
        ["2023.1", "2023.2", "2024.1"],
        ["101", "202"],
        ["DCC1001", "MAT0025"],
    ))
}

/// Header line declaring a semester
pub fn semester_line(id: &str) -> String {
    format!("          {} {}", SEMESTER_MARKER, id)
}

/// Header line declaring a program
pub fn program_line(id: &str) -> String {
    format!("{} {} - ENGENHARIA DE COMPUTACAO", PROGRAM_MARKER, id)
}

/// Course marker line without data on it
pub fn course_line(course_id: &str) -> String {
    format!("{} CALCULO DIFERENCIAL E INTEGRAL I", course_id)
}

/// Page break line as printed between report pages
pub fn page_break_line() -> String {
    format!("{}RELATORIO DE DESEMPENHO ACADEMICO", PAGE_BREAK_CHAR)
}

/// Columns of a well-formed data row, outcome fields at their offsets
fn base_fields(
    class_id: &str,
    total: u32,
    approved: u32,
    disapproved_grade: u32,
    disapproved_attendance: u32,
) -> Vec<String> {
    let mut fields: Vec<String> = vec!["0".to_string(); MIN_DATA_FIELDS];
    fields[0] = class_id.to_string();
    fields[2] = total.to_string();
    fields[3] = approved.to_string();
    fields[5] = disapproved_grade.to_string();
    fields[18] = disapproved_attendance.to_string();
    fields
}

/// Well-formed data row with the minimum column count
pub fn data_row(
    class_id: &str,
    total: u32,
    approved: u32,
    disapproved_grade: u32,
    disapproved_attendance: u32,
) -> String {
    base_fields(
        class_id,
        total,
        approved,
        disapproved_grade,
        disapproved_attendance,
    )
    .join(" ")
}

/// Data row opening with its course marker on the same line
pub fn course_data_row(
    course_id: &str,
    class_id: &str,
    total: u32,
    approved: u32,
    disapproved_grade: u32,
    disapproved_attendance: u32,
) -> String {
    format!(
        "{} {}",
        course_id,
        data_row(
            class_id,
            total,
            approved,
            disapproved_grade,
            disapproved_attendance
        )
    )
}

/// Data row with the printed page number wrapped in as a spurious token
pub fn data_row_with_page_number(
    class_id: &str,
    total: u32,
    approved: u32,
    disapproved_grade: u32,
    disapproved_attendance: u32,
    page: u32,
) -> String {
    let mut fields = base_fields(
        class_id,
        total,
        approved,
        disapproved_grade,
        disapproved_attendance,
    );

    // After insertion the token sits exactly ten positions from the row end
    let position = fields.len() + 1 - INJECTED_TOKEN_FROM_END;
    fields.insert(position, injected_page_token(page));

    fields.join(" ")
}
