//! Riptide Library
//!
//! A Rust library for extracting academic performance records from
//! fixed-layout university report exports.
//!
//! This library provides tools for:
//! - Segmenting multi-page plain-text reports on form-feed page breaks
//! - Tracking semester/program/course context from sparse page headers
//! - Repairing page-number-injected rows and extracting fixed-offset fields
//! - Loading semester/program/course metadata for membership lookups
//! - Reconciling extracted records into a keyed store with CSV/JSON export
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod metadata_registry;
        pub mod performance_store;
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Performance, RecordKey};
pub use config::Config;

/// Result type alias for riptide operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for report processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Metadata registry error
    #[error("Metadata registry error: {message}")]
    Metadata { message: String },

    /// Metadata document format error
    #[error("Metadata format error in file '{file}': {message}")]
    MetadataFormat {
        file: String,
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Export writing error
    #[error("Export error: {message}")]
    Export {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a metadata registry error
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create a metadata format error with context
    pub fn metadata_format(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<toml::de::Error>,
    ) -> Self {
        Self::MetadataFormat {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an export error
    pub fn export(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Export {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::MetadataFormat {
            file: "unknown".to_string(),
            message: "TOML parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Export {
            message: "CSV writing failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Export {
            message: "JSON serialization failed".to_string(),
            source: Box::new(error),
        }
    }
}
