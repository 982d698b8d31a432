//! Test utilities for metadata registry testing

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod loader_tests;
mod registry_tests;

/// Helper to create a temporary metadata document with given content
pub fn create_metadata_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// A complete, well-formed metadata document
pub fn complete_metadata_toml() -> &'static str {
    r#"semesters = ["2023.1", "2023.2", "2024.1"]
programs = ["101", "202"]
courses = ["DCC1001", "MAT0025"]
"#
}
