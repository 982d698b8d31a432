//! Tests for page context lifecycle

use crate::app::services::report_parser::PageContext;
use crate::constants::FIRST_PAGE_NUMBER;

fn full_context() -> PageContext {
    let mut context = PageContext::new();
    context.semester_id = Some("2023.1".to_string());
    context.program_id = Some("101".to_string());
    context.course_id = Some("DCC1001".to_string());
    context
}

#[test]
fn test_new_context_is_empty_on_first_page() {
    let context = PageContext::new();

    assert_eq!(context.page, FIRST_PAGE_NUMBER);
    assert!(!context.has_program());
    assert!(!context.is_complete());
    assert!(context.snapshot().is_none());
}

#[test]
fn test_default_matches_new() {
    assert_eq!(PageContext::default(), PageContext::new());
}

#[test]
fn test_snapshot_requires_all_three_identifiers() {
    let mut context = PageContext::new();
    context.semester_id = Some("2023.1".to_string());
    context.program_id = Some("101".to_string());
    assert!(context.snapshot().is_none());

    context.course_id = Some("DCC1001".to_string());
    assert_eq!(
        context.snapshot(),
        Some((
            "2023.1".to_string(),
            "101".to_string(),
            "DCC1001".to_string()
        ))
    );
}

#[test]
fn test_start_next_page_clears_and_increments() {
    let mut context = full_context();

    context.start_next_page();

    assert_eq!(context.page, FIRST_PAGE_NUMBER + 1);
    assert!(context.semester_id.is_none());
    assert!(context.program_id.is_none());
    assert!(context.course_id.is_none());
}

#[test]
fn test_clear_keeps_page_number() {
    let mut context = full_context();
    context.page = 5;

    context.clear();

    assert_eq!(context.page, 5);
    assert!(!context.is_complete());
}
