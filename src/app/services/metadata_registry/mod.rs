//! Metadata registry service for semester, program and course lookups
//!
//! This module provides the membership sets the report parser checks
//! identifiers against. The sets are loaded from a TOML document and
//! indexed for O(1) lookups; the parser treats them as opaque.

use std::collections::HashSet;

pub mod loader;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::LoadStats;

/// Registry of known semester, program and course identifiers
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    /// Valid semester identifiers (e.g. "2023.1")
    pub(crate) semesters: HashSet<String>,

    /// Valid program identifiers (e.g. "101")
    pub(crate) programs: HashSet<String>,

    /// Valid course identifiers, each exactly seven characters
    pub(crate) courses: HashSet<String>,
}

impl MetadataRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry directly from identifier collections
    pub fn from_sets<S, P, C>(semesters: S, programs: P, courses: C) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            semesters: semesters.into_iter().map(Into::into).collect(),
            programs: programs.into_iter().map(Into::into).collect(),
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a semester identifier is known
    pub fn contains_semester(&self, id: &str) -> bool {
        self.semesters.contains(id)
    }

    /// Check if a program identifier is known
    pub fn contains_program(&self, id: &str) -> bool {
        self.programs.contains(id)
    }

    /// Check if a course identifier is known
    pub fn contains_course(&self, id: &str) -> bool {
        self.courses.contains(id)
    }

    /// Number of known semesters
    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Number of known programs
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Number of known courses
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether all three sets are empty
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty() && self.programs.is_empty() && self.courses.is_empty()
    }

    /// Get a summary string of the registry contents
    pub fn summary(&self) -> String {
        format!(
            "Registry with {} semesters, {} programs, {} courses",
            self.semester_count(),
            self.program_count(),
            self.course_count()
        )
    }
}
