//! Page-scoped parsing context
//!
//! This module defines the mutable context carried across the lines of one
//! report page: the semester, program and course identifiers declared by
//! sparse header lines, and the current page number.

use crate::constants::FIRST_PAGE_NUMBER;

/// Context active while reading one page of the report
///
/// Header lines are sparse: a semester or program declaration applies to all
/// data lines that follow it until the next page break, and a course marker
/// applies until replaced or reset. The context is cleared as a whole on
/// every page break so values can never leak across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Semester identifier declared on this page
    pub semester_id: Option<String>,

    /// Program identifier declared on this page
    pub program_id: Option<String>,

    /// Course identifier of the most recent course marker
    pub course_id: Option<String>,

    /// Current page number (starts at 1)
    pub page: u32,
}

impl PageContext {
    /// Create the context for the first page
    pub fn new() -> Self {
        Self {
            semester_id: None,
            program_id: None,
            course_id: None,
            page: FIRST_PAGE_NUMBER,
        }
    }

    /// Clear the semester, program and course identifiers
    pub fn clear(&mut self) {
        self.semester_id = None;
        self.program_id = None;
        self.course_id = None;
    }

    /// Advance to the next page, clearing all identifiers
    pub fn start_next_page(&mut self) {
        self.page += 1;
        self.clear();
    }

    /// Whether a program was declared on the current page
    pub fn has_program(&self) -> bool {
        self.program_id.is_some()
    }

    /// Whether data lines can be attributed to a full context
    pub fn is_complete(&self) -> bool {
        self.semester_id.is_some() && self.program_id.is_some() && self.course_id.is_some()
    }

    /// Cloned (semester, program, course) triple once all three are set
    pub fn snapshot(&self) -> Option<(String, String, String)> {
        match (&self.semester_id, &self.program_id, &self.course_id) {
            (Some(semester), Some(program), Some(course)) => {
                Some((semester.clone(), program.clone(), course.clone()))
            }
            _ => None,
        }
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new()
    }
}
