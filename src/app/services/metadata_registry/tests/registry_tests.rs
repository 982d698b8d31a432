//! Tests for registry membership queries

use crate::app::services::metadata_registry::MetadataRegistry;

#[test]
fn test_new_registry_is_empty() {
    let registry = MetadataRegistry::new();

    assert!(registry.is_empty());
    assert_eq!(registry.semester_count(), 0);
    assert!(!registry.contains_semester("2023.1"));
}

#[test]
fn test_from_sets_builds_membership() {
    let registry =
        MetadataRegistry::from_sets(["2023.1"], ["101", "202"], ["DCC1001", "MAT0025"]);

    assert!(registry.contains_semester("2023.1"));
    assert!(!registry.contains_semester("2024.1"));
    assert!(registry.contains_program("101"));
    assert!(!registry.contains_program("999"));
    assert!(registry.contains_course("DCC1001"));
    assert!(!registry.contains_course("dcc1001"));
}

#[test]
fn test_lookups_are_exact_matches() {
    let registry = MetadataRegistry::from_sets(["2023.1"], ["101"], ["DCC1001"]);

    // Neither prefixes nor padded variants match
    assert!(!registry.contains_semester("2023"));
    assert!(!registry.contains_program(" 101"));
    assert!(!registry.contains_course("DCC1001 "));
}

#[test]
fn test_is_empty_requires_all_sets_empty() {
    let registry = MetadataRegistry::from_sets(Vec::<String>::new(), ["101"], Vec::<String>::new());

    assert!(!registry.is_empty());
}

#[test]
fn test_summary_reports_set_sizes() {
    let registry = MetadataRegistry::from_sets(["2023.1", "2023.2"], ["101"], ["DCC1001"]);

    let summary = registry.summary();
    assert!(summary.contains("2 semesters"));
    assert!(summary.contains("1 programs"));
    assert!(summary.contains("1 courses"));
}
