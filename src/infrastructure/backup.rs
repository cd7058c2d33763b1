//! Timestamped catalog backups
//!
//! The backup sits next to the catalog as `<catalog>.backup-<unix seconds>`.
//! It is created with create-new semantics so an existing file is never
//! replaced, and carries the source permissions and timestamps where the
//! platform allows setting them.

use std::ffi::OsString;
use std::fs::{self, File, FileTimes, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::{EnrichError, EnrichResult};
use crate::infrastructure::config::defaults::BACKUP_INFIX;

/// A backup that has been fully written and synced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    path: PathBuf,
    bytes: u64,
}

impl BackupFile {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name only, for operator messages
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }
}

/// `<catalog>.backup-<timestamp>`, in the catalog's directory
#[must_use]
pub fn backup_path_for(catalog: &Path, timestamp: i64) -> PathBuf {
    let mut name = OsString::from(catalog.as_os_str());
    name.push(format!("{BACKUP_INFIX}{timestamp}"));
    PathBuf::from(name)
}

/// Back up `catalog` using the current unix time
pub fn create_backup(catalog: &Path) -> EnrichResult<BackupFile> {
    create_backup_at(catalog, Utc::now().timestamp())
}

/// Back up `catalog` to the path derived from `timestamp`
pub fn create_backup_at(catalog: &Path, timestamp: i64) -> EnrichResult<BackupFile> {
    let backup = backup_path_for(catalog, timestamp);
    let failed = |source: io::Error| EnrichError::BackupFailed {
        catalog: catalog.to_path_buf(),
        backup: backup.clone(),
        source,
    };

    let mut source = File::open(catalog).map_err(failed)?;
    let metadata = source.metadata().map_err(failed)?;
    let mut target = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&backup)
        .map_err(failed)?;

    match copy_contents(&mut source, &mut target, &metadata) {
        Ok(bytes) => {
            debug!("Backed up {} bytes to {}", bytes, backup.display());
            Ok(BackupFile {
                path: backup,
                bytes,
            })
        }
        Err(e) => {
            drop(target);
            if let Err(cleanup) = fs::remove_file(&backup) {
                warn!(
                    "Failed to remove partial backup {}: {}",
                    backup.display(),
                    cleanup
                );
            }
            Err(failed(e))
        }
    }
}

fn copy_contents(source: &mut File, target: &mut File, metadata: &Metadata) -> io::Result<u64> {
    let bytes = io::copy(source, target)?;
    if bytes != metadata.len() {
        return Err(io::Error::other(format!(
            "catalog changed during backup: copied {bytes} of {} bytes",
            metadata.len()
        )));
    }
    target.sync_all()?;
    copy_metadata(target, metadata);
    Ok(bytes)
}

/// Best effort: unsupported platforms keep the defaults of a fresh file
fn copy_metadata(target: &File, metadata: &Metadata) {
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Err(e) = target.set_times(times) {
        warn!("Could not copy timestamps to backup: {}", e);
    }
    if let Err(e) = target.set_permissions(metadata.permissions()) {
        warn!("Could not copy permissions to backup: {}", e);
    }
}
