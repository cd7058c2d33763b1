//! Infrastructure layer for file access, configuration and logging

pub mod backup;
pub mod catalog_store;
pub mod config;
pub mod logging;

pub use backup::{BackupFile, create_backup};
pub use catalog_store::{read_catalog, write_catalog};
pub use config::{AppConfig, LoggingConfig};
pub use logging::init_logging_with_config;
