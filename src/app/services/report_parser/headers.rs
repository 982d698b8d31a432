//! Sparse header line recognition and identifier extraction
//!
//! Semester and program declarations appear as scattered header lines whose
//! identifiers are anchored to fixed marker texts. Recognition (marker
//! present) and extraction (identifier parsed) are separate steps so the
//! caller can warn about header lines whose identifier cannot be read.

use crate::constants::{PROGRAM_MARKER, SEMESTER_MARKER};
use regex::Regex;
use std::sync::LazyLock;

/// Semester identifiers are numeric with an optional dotted period (e.g. "2023.1")
static SEMESTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s+(?P<id>\d+(?:\.\d+)?)", SEMESTER_MARKER))
        .expect("semester pattern is valid")
});

/// Program identifiers are plain numeric
static PROGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s+(?P<id>\d+)", PROGRAM_MARKER)).expect("program pattern is valid")
});

/// Check whether a line declares a semester
pub fn is_semester_header(line: &str) -> bool {
    line.contains(SEMESTER_MARKER)
}

/// Check whether a line declares a program
pub fn is_program_header(line: &str) -> bool {
    line.contains(PROGRAM_MARKER)
}

/// Extract the semester identifier from a semester header line
pub fn extract_semester_id(line: &str) -> Option<&str> {
    SEMESTER_RE
        .captures(line)
        .and_then(|caps| caps.name("id"))
        .map(|m| m.as_str())
}

/// Extract the program identifier from a program header line
pub fn extract_program_id(line: &str) -> Option<&str> {
    PROGRAM_RE
        .captures(line)
        .and_then(|caps| caps.name("id"))
        .map(|m| m.as_str())
}
