//! Metadata registry loading
//!
//! This module handles loading the identifier sets from a TOML metadata
//! document. Course entries that cannot work as line prefixes are rejected
//! at load time so the parser never has to reason about them.

use super::MetadataRegistry;
use crate::constants::COURSE_ID_LEN;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// On-disk shape of the metadata document
///
/// ```toml
/// semesters = ["2023.1", "2023.2"]
/// programs  = ["101", "62"]
/// courses   = ["DCC1001"]
/// ```
#[derive(Debug, Deserialize)]
struct MetadataDocument {
    #[serde(default)]
    semesters: Vec<String>,

    #[serde(default)]
    programs: Vec<String>,

    #[serde(default)]
    courses: Vec<String>,
}

/// Statistics about the metadata registry loading process
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of distinct semesters loaded
    pub semesters_loaded: usize,

    /// Number of distinct programs loaded
    pub programs_loaded: usize,

    /// Number of distinct courses loaded
    pub courses_loaded: usize,

    /// Number of entries rejected during loading
    pub entries_rejected: usize,

    /// Time taken to load the registry
    pub load_duration: std::time::Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of identifiers loaded across all sets
    pub fn total_loaded(&self) -> usize {
        self.semesters_loaded + self.programs_loaded + self.courses_loaded
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} semesters, {} programs, {} courses ({} entries rejected) in {:.2}s",
            self.semesters_loaded,
            self.programs_loaded,
            self.courses_loaded,
            self.entries_rejected,
            self.load_duration.as_secs_f64()
        )
    }
}

impl MetadataRegistry {
    /// Load the registry from a TOML metadata document
    ///
    /// Course identifiers must be exactly seven ASCII characters to function
    /// as byte-length line prefixes; other entries are warn-logged and
    /// skipped. Duplicate entries collapse into the sets silently.
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the document does not exist
    /// * Returns `Error::Io` for file system access issues
    /// * Returns `Error::MetadataFormat` for malformed TOML
    pub fn load_from_file(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading metadata registry from {}", path.display());
        let start_time = Instant::now();

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read metadata file '{}'", path.display()),
                e,
            )
        })?;

        let document: MetadataDocument = toml::from_str(&contents).map_err(|e| {
            Error::metadata_format(
                path.display().to_string(),
                "Failed to parse metadata document",
                Some(e),
            )
        })?;

        let mut registry = Self::new();
        let mut stats = LoadStats::new();

        for semester in document.semesters {
            registry.semesters.insert(semester);
        }

        for program in document.programs {
            registry.programs.insert(program);
        }

        for course in document.courses {
            // ASCII keeps the char count equal to the byte length the
            // parser slices by
            if course.chars().count() != COURSE_ID_LEN || !course.is_ascii() {
                warn!(
                    "Skipping course id '{}': expected exactly {} ASCII characters",
                    course, COURSE_ID_LEN
                );
                stats.entries_rejected += 1;
                continue;
            }
            registry.courses.insert(course);
        }

        stats.semesters_loaded = registry.semester_count();
        stats.programs_loaded = registry.program_count();
        stats.courses_loaded = registry.course_count();
        stats.load_duration = start_time.elapsed();

        if registry.is_empty() {
            warn!("Metadata registry is empty: no report lines will match");
        }

        info!("{}", stats.summary());
        Ok((registry, stats))
    }
}
