//! Tests for metadata document loading

use super::*;
use crate::Error;
use crate::app::services::metadata_registry::MetadataRegistry;
use std::path::Path;

#[test]
fn test_load_complete_document() {
    let file = create_metadata_file(complete_metadata_toml());

    let (registry, stats) = MetadataRegistry::load_from_file(file.path()).unwrap();

    assert_eq!(registry.semester_count(), 3);
    assert_eq!(registry.program_count(), 2);
    assert_eq!(registry.course_count(), 2);
    assert!(registry.contains_semester("2023.1"));
    assert!(registry.contains_program("202"));
    assert!(registry.contains_course("MAT0025"));

    assert_eq!(stats.total_loaded(), 7);
    assert_eq!(stats.entries_rejected, 0);
}

#[test]
fn test_load_rejects_misshaped_course_ids() {
    let file = create_metadata_file(
        r#"courses = ["DCC1001", "MAT25", "ENGENHARIA1", ""]
"#,
    );

    let (registry, stats) = MetadataRegistry::load_from_file(file.path()).unwrap();

    assert_eq!(registry.course_count(), 1);
    assert!(registry.contains_course("DCC1001"));
    assert!(!registry.contains_course("MAT25"));
    assert_eq!(stats.entries_rejected, 3);
}

#[test]
fn test_load_rejects_non_ascii_course_ids() {
    // Seven chars but eight bytes: such an id can never equal a seven-byte
    // line prefix, so it must not load as a dead entry.
    let file = create_metadata_file(
        r#"courses = ["ÀBC1234", "DCC1001"]
"#,
    );

    let (registry, stats) = MetadataRegistry::load_from_file(file.path()).unwrap();

    assert_eq!(registry.course_count(), 1);
    assert!(registry.contains_course("DCC1001"));
    assert!(!registry.contains_course("ÀBC1234"));
    assert_eq!(stats.entries_rejected, 1);
}

#[test]
fn test_load_missing_file() {
    let result = MetadataRegistry::load_from_file(Path::new("/nonexistent/metadata.toml"));

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn test_load_malformed_document() {
    let file = create_metadata_file("semesters = [\"2023.1\"");

    let result = MetadataRegistry::load_from_file(file.path());

    match result {
        Err(Error::MetadataFormat { file: path, .. }) => {
            assert_eq!(path, file.path().display().to_string());
        }
        other => panic!("Expected MetadataFormat error, got {:?}", other),
    }
}

#[test]
fn test_missing_arrays_default_to_empty() {
    let file = create_metadata_file("semesters = [\"2023.1\"]\n");

    let (registry, stats) = MetadataRegistry::load_from_file(file.path()).unwrap();

    assert_eq!(registry.semester_count(), 1);
    assert_eq!(registry.program_count(), 0);
    assert_eq!(registry.course_count(), 0);
    assert!(!registry.is_empty());
    assert_eq!(stats.total_loaded(), 1);
}

#[test]
fn test_duplicate_entries_collapse() {
    let file = create_metadata_file(
        r#"semesters = ["2023.1", "2023.1", "2023.2"]
programs = ["101", "101"]
"#,
    );

    let (registry, stats) = MetadataRegistry::load_from_file(file.path()).unwrap();

    assert_eq!(registry.semester_count(), 2);
    assert_eq!(registry.program_count(), 1);
    assert_eq!(stats.semesters_loaded, 2);
    assert_eq!(stats.programs_loaded, 1);
}

#[test]
fn test_empty_document_loads_empty_registry() {
    let file = create_metadata_file("");

    let (registry, stats) = MetadataRegistry::load_from_file(file.path()).unwrap();

    assert!(registry.is_empty());
    assert_eq!(stats.total_loaded(), 0);
}

#[test]
fn test_load_stats_summary() {
    let file = create_metadata_file(complete_metadata_toml());

    let (_, stats) = MetadataRegistry::load_from_file(file.path()).unwrap();

    let summary = stats.summary();
    assert!(summary.contains("3 semesters"));
    assert!(summary.contains("2 programs"));
    assert!(summary.contains("2 courses"));
    assert!(summary.contains("0 entries rejected"));
}
