//! Configuration infrastructure
//!
//! The tool runs against fixed relative filenames. The typed configuration
//! exists so the library can be pointed at another directory (tests,
//! embedding) without changing the defaults the binary uses.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vendor export (CSV with `Handle` and `Vendor` columns)
    pub vendor_csv_path: PathBuf,

    /// Catalog JSON file, read and overwritten in place
    pub catalog_path: PathBuf,

    /// Number of unmatched products reported individually
    pub not_found_preview_limit: usize,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for the log file when file output is enabled
    pub log_dir: PathBuf,

    /// Log file name inside `log_dir`
    pub file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vendor_csv_path: PathBuf::from(defaults::VENDOR_CSV_PATH),
            catalog_path: PathBuf::from(defaults::CATALOG_PATH),
            not_found_preview_limit: defaults::NOT_FOUND_PREVIEW_LIMIT,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            log_dir: PathBuf::from(defaults::LOG_DIR),
            file_name: defaults::LOG_FILE_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Default configuration with the input files resolved against `base_dir`
    #[must_use]
    pub fn with_base_dir(base_dir: &Path) -> Self {
        let mut config = Self::default();
        config.vendor_csv_path = base_dir.join(&config.vendor_csv_path);
        config.catalog_path = base_dir.join(&config.catalog_path);
        config
    }
}

/// Default configuration values
pub mod defaults {
    /// Vendor export, relative to the working directory
    pub const VENDOR_CSV_PATH: &str = "Products.csv";

    /// Catalog file, relative to the working directory
    pub const CATALOG_PATH: &str = "valid_image_catalog.json";

    /// Unmatched products listed individually before only counting
    pub const NOT_FOUND_PREVIEW_LIMIT: usize = 5;

    /// Infix between the catalog file name and the unix timestamp
    pub const BACKUP_INFIX: &str = ".backup-";

    // Log configuration defaults
    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;
    pub const LOG_DIR: &str = "logs";
    pub const LOG_FILE_NAME: &str = "catalog-vendor-sync.log";
}
