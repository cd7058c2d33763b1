//! Error types for the vendor enrichment run
//!
//! Every failure aborts the run. The variants are ordered by the pipeline step
//! that raises them; `BackupFailed` guarantees the catalog was not touched,
//! `WriteFailed` means the backup holds the pre-update state.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Required input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed input in {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error(
        "Failed to create backup {} of {}: {source} (catalog left untouched)",
        backup.display(),
        catalog.display()
    )]
    BackupFailed {
        catalog: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Failed to write updated catalog {}: {source}; restore it from backup {}",
        catalog.display(),
        backup.display()
    )]
    WriteFailed {
        catalog: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EnrichError {
    /// Classify an I/O error raised while opening or reading an input file
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// True when the on-disk catalog is guaranteed to be in its original state
    pub const fn catalog_untouched(&self) -> bool {
        !matches!(self, Self::WriteFailed { .. })
    }

    /// Backup holding the pre-update catalog, if one was created before the failure
    pub fn backup_path(&self) -> Option<&Path> {
        match self {
            Self::WriteFailed { backup, .. } => Some(backup),
            _ => None,
        }
    }
}

pub type EnrichResult<T> = Result<T, EnrichError>;
