//! Page boundary handling for the report line stream
//!
//! The export separates pages with a form feed control character. A page
//! break consumes its line, resets the page context, and flags pages that
//! ended without ever declaring a program.

use super::context::PageContext;
use super::stats::ParseStats;
use crate::constants::PAGE_BREAK_CHAR;
use tracing::warn;

/// Check whether a line marks a page boundary
pub fn is_page_break(line: &str) -> bool {
    line.contains(PAGE_BREAK_CHAR)
}

/// Consume a page break line, if this line is one
///
/// Returns `true` when the line was a page break and no further
/// classification should happen. Runs before all other classification so a
/// post-break line always sees fresh context.
pub fn handle_page_break(line: &str, context: &mut PageContext, stats: &mut ParseStats) -> bool {
    if !is_page_break(line) {
        return false;
    }

    if !context.has_program() {
        warn!("Page {} couldn't be parsed", context.page);
        stats.pages_unparsed += 1;
    }

    stats.pages_completed += 1;
    context.start_next_page();
    true
}
