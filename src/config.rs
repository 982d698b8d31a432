//! Configuration management and validation.
//!
//! Provides configuration structures for the metadata registry location,
//! export settings, and logging, with layered loading from defaults, an
//! optional TOML file, and command-line overrides.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, METADATA_FILENAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output format names accepted in configuration files
const VALID_OUTPUT_FORMATS: &[&str] = &["human", "csv", "json"];

/// Log level names accepted in configuration files
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Global configuration for report processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Metadata registry settings
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Export settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metadata registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Path to the metadata TOML document (defaults to the user config directory)
    pub path: Option<PathBuf>,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Export file path (defaults to a format-specific name in the working directory)
    pub path: Option<PathBuf>,

    /// Export format: "human", "csv" or "json"
    pub format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: "human".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default configuration file location in the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
    }

    /// Default metadata document location in the user config directory
    pub fn default_metadata_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(METADATA_FILENAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration using layered approach (defaults -> file)
    ///
    /// CLI argument overrides are applied by the caller after loading.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the metadata document path, falling back to the default location
    pub fn metadata_path(&self) -> Result<PathBuf> {
        match &self.metadata.path {
            Some(path) => Ok(path.clone()),
            None => Self::default_metadata_path(),
        }
    }

    /// Create the export file's parent directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if let Some(path) = &self.output.path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        Error::configuration(format!(
                            "Failed to create output directory '{}': {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !VALID_OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid output format '{}' (expected one of: {})",
                self.output.format,
                VALID_OUTPUT_FORMATS.join(", ")
            )));
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}' (expected one of: {})",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.format, "human");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_output_format_rejected() {
        let mut config = Config::default();
        config.output.format = "parquet".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_parses_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[output]\nformat = \"csv\"\npath = \"out/records.csv\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, "csv");
        assert_eq!(
            config.output.path,
            Some(PathBuf::from("out/records.csv"))
        );
        // Unspecified sections fall back to defaults
        assert_eq!(config.logging.level, "warn");
        assert!(config.metadata.path.is_none());
    }

    #[test]
    fn test_from_file_missing_file_errors() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_layered_without_file_uses_defaults() {
        let config = Config::load_layered(None).unwrap();
        assert_eq!(config.output.format, "human");
    }
}
