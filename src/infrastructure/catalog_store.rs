//! Catalog file access
//!
//! Reads and validates the catalog document, and writes it back as
//! two-space indented JSON.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::domain::{Catalog, EnrichError, EnrichResult};
use crate::infrastructure::backup::BackupFile;

/// Read and validate the catalog at `path`
pub fn read_catalog(path: &Path) -> EnrichResult<Catalog> {
    let bytes = fs::read(path).map_err(|e| EnrichError::from_read(path, e))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| EnrichError::malformed(path, format!("invalid JSON: {e}")))?;
    let catalog = Catalog::from_value(value).map_err(|reason| EnrichError::malformed(path, reason))?;

    debug!(
        "Read catalog {} ({} bytes, {} products)",
        path.display(),
        bytes.len(),
        catalog.product_count()
    );
    Ok(catalog)
}

/// Overwrite `path` with the catalog. Requires the backup taken of that same
/// file; a failure here leaves `backup` as the only intact copy.
///
/// Non-ASCII text is written as raw UTF-8, not `\uXXXX` escapes, so output
/// differs textually from catalogs produced by ASCII-escaping JSON writers.
/// Numbers keep their original textual form.
pub fn write_catalog(path: &Path, catalog: &Catalog, backup: &BackupFile) -> EnrichResult<()> {
    let write_failed = |source: std::io::Error| EnrichError::WriteFailed {
        catalog: path.to_path_buf(),
        backup: backup.path().to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalog).map_err(|e| write_failed(e.into()))?;
    writer.flush().map_err(write_failed)?;
    writer
        .into_inner()
        .map_err(|e| write_failed(e.into_error()))?
        .sync_all()
        .map_err(write_failed)?;

    debug!("Wrote catalog {}", path.display());
    Ok(())
}
