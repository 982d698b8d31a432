//! Report parser for academic performance exports
//!
//! This module provides a stateful, error-tolerant parser for the fixed
//! layout, multi-page plain-text report in which the institution publishes
//! per-class performance counts. Context declared by sparse header lines is
//! carried across many data lines and reset on page breaks; each data line
//! is validated independently, and bad lines are logged and skipped rather
//! than failing the pass.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Orchestration and the lazy record stream
//! - [`context`] - Page-scoped semester/program/course state
//! - [`segmenter`] - Page boundary detection and context reset
//! - [`headers`] - Header marker recognition and identifier extraction
//! - [`record_line`] - Data row tokenization, repair and field extraction
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use riptide::app::services::metadata_registry::MetadataRegistry;
//! use riptide::app::services::report_parser::ReportParser;
//!
//! let registry = Arc::new(MetadataRegistry::from_sets(
//!     ["2023.1"],
//!     ["101"],
//!     ["DCC1001"],
//! ));
//! let parser = ReportParser::new(registry);
//!
//! let lines = vec![
//!     "Semestre - 2023.1".to_string(),
//!     "Curso:  101".to_string(),
//! ];
//! let outcome = parser.parse_lines(lines.into_iter());
//!
//! assert!(outcome.performances.is_empty());
//! assert_eq!(outcome.stats.lines_read, 2);
//! ```

pub mod context;
pub mod headers;
pub mod parser;
pub mod record_line;
pub mod segmenter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use context::PageContext;
pub use parser::{RecordStream, ReportParser};
pub use stats::{ParseOutcome, ParseStats};
