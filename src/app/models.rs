//! Data models for academic performance processing
//!
//! This module contains the core data structures for representing extracted
//! academic performance records, following the layout of the university
//! report export.

use crate::constants::COURSE_ID_LEN;
use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Class identifiers are five digits with an optional trailing letter
static CLASS_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}[A-Za-z]?$").expect("class id pattern is valid"));

// =============================================================================
// Performance Record Structure
// =============================================================================

/// Academic performance record for one class offering
///
/// This structure represents the outcome counts of a single class within a
/// program and semester, as printed in the institutional report export.
/// Field order matches the exported column order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Performance {
    /// Class identifier (five digits, optional section letter, e.g. "10234A")
    pub class_id: String,

    /// Academic period identifier (e.g. "2023.1")
    pub semester_id: String,

    /// Degree program identifier
    pub program_id: u32,

    /// Course identifier (fixed seven-character code)
    pub course_id: String,

    /// Students approved
    pub approved: u32,

    /// Students disapproved on grades
    pub disapproved_grade: u32,

    /// Students disapproved on attendance
    pub disapproved_attendance: u32,
}

impl Performance {
    /// Create a new performance record with validation
    pub fn new(
        class_id: String,
        semester_id: String,
        program_id: u32,
        course_id: String,
        approved: u32,
        disapproved_grade: u32,
        disapproved_attendance: u32,
    ) -> Result<Self> {
        let performance = Self {
            class_id,
            semester_id,
            program_id,
            course_id,
            approved,
            disapproved_grade,
            disapproved_attendance,
        };

        performance.validate()?;
        Ok(performance)
    }

    /// Validate record fields for shape and consistency
    pub fn validate(&self) -> Result<()> {
        if !is_valid_class_id(&self.class_id) {
            return Err(Error::data_validation(format!(
                "Invalid class id '{}': must be five digits with an optional trailing letter",
                self.class_id
            )));
        }

        if self.semester_id.trim().is_empty() {
            return Err(Error::data_validation(
                "Semester id cannot be empty".to_string(),
            ));
        }

        if self.course_id.chars().count() != COURSE_ID_LEN {
            return Err(Error::data_validation(format!(
                "Invalid course id '{}': must be exactly {} characters",
                self.course_id, COURSE_ID_LEN
            )));
        }

        Ok(())
    }

    /// Enrolled students accounted for by grade outcomes
    pub fn total(&self) -> u32 {
        self.approved + self.disapproved_grade
    }

    /// Get the reconciliation key for this record
    pub fn key(&self) -> RecordKey {
        RecordKey {
            program_id: self.program_id,
            semester_id: self.semester_id.clone(),
            course_id: self.course_id.clone(),
            class_id: self.class_id.clone(),
        }
    }
}

/// Check whether a token has the class identifier shape
pub fn is_valid_class_id(token: &str) -> bool {
    CLASS_ID_RE.is_match(token)
}

// =============================================================================
// Record Key
// =============================================================================

/// Identity of a class offering, used to reconcile repeated extractions
///
/// Records for the same offering can appear on multiple pages of a report;
/// the key orders by program, then semester, course and class, which gives
/// exports a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    /// Degree program identifier
    pub program_id: u32,

    /// Academic period identifier
    pub semester_id: String,

    /// Course identifier
    pub course_id: String,

    /// Class identifier
    pub class_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_performance() -> Performance {
        Performance {
            class_id: "10234A".to_string(),
            semester_id: "2023.1".to_string(),
            program_id: 101,
            course_id: "DCC1001".to_string(),
            approved: 25,
            disapproved_grade: 5,
            disapproved_attendance: 2,
        }
    }

    #[test]
    fn test_performance_creation_valid() {
        let performance = Performance::new(
            "10234A".to_string(),
            "2023.1".to_string(),
            101,
            "DCC1001".to_string(),
            25,
            5,
            2,
        )
        .unwrap();

        assert_eq!(performance.class_id, "10234A");
        assert_eq!(performance.total(), 30);
        assert!(performance.validate().is_ok());
    }

    #[test]
    fn test_class_id_shapes() {
        assert!(is_valid_class_id("12345"));
        assert!(is_valid_class_id("12345A"));
        assert!(is_valid_class_id("12345z"));

        assert!(!is_valid_class_id("1234"));
        assert!(!is_valid_class_id("123456"));
        assert!(!is_valid_class_id("ABCDE"));
        assert!(!is_valid_class_id("12345_"));
        assert!(!is_valid_class_id("12345AB"));
        assert!(!is_valid_class_id(""));
    }

    #[test]
    fn test_performance_rejects_bad_class_id() {
        let mut performance = create_test_performance();
        performance.class_id = "1234".to_string();
        assert!(performance.validate().is_err());
    }

    #[test]
    fn test_performance_rejects_empty_semester() {
        let mut performance = create_test_performance();
        performance.semester_id = "  ".to_string();
        assert!(performance.validate().is_err());
    }

    #[test]
    fn test_performance_rejects_short_course_id() {
        let mut performance = create_test_performance();
        performance.course_id = "DCC1".to_string();
        assert!(performance.validate().is_err());
    }

    #[test]
    fn test_record_key_ordering() {
        let early = RecordKey {
            program_id: 62,
            semester_id: "2023.1".to_string(),
            course_id: "DCC1001".to_string(),
            class_id: "10234A".to_string(),
        };
        let late = RecordKey {
            program_id: 101,
            semester_id: "2022.2".to_string(),
            course_id: "AAA0001".to_string(),
            class_id: "00001".to_string(),
        };

        // Program id dominates the ordering
        assert!(early < late);
    }

    #[test]
    fn test_key_identifies_offering() {
        let a = create_test_performance();
        let mut b = create_test_performance();
        b.approved = 99;

        // Count fields do not participate in identity
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_serde_serialization() {
        let performance = create_test_performance();

        let json = serde_json::to_string(&performance).unwrap();
        let deserialized: Performance = serde_json::from_str(&json).unwrap();
        assert_eq!(performance, deserialized);
    }
}
