//! Vendor enrichment use case
//!
//! Load vendors, read the catalog, join, back up, write. Each step runs once
//! and any error ends the run. The catalog file is only written after its
//! backup has been created.

use std::path::PathBuf;

use tracing::{error, info};

use crate::application::catalog_updater::{UpdateSummary, apply_vendors};
use crate::application::vendor_map_loader::load_vendor_map;
use crate::domain::EnrichResult;
use crate::infrastructure::backup::create_backup;
use crate::infrastructure::catalog_store::{read_catalog, write_catalog};
use crate::infrastructure::config::AppConfig;

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentReport {
    pub vendors_loaded: usize,
    pub summary: UpdateSummary,
    pub catalog_path: PathBuf,
    pub backup_path: PathBuf,
}

impl EnrichmentReport {
    #[must_use]
    pub const fn updated(&self) -> usize {
        self.summary.updated
    }

    #[must_use]
    pub const fn not_found(&self) -> usize {
        self.summary.not_found
    }
}

/// Run the full enrichment against the files named in `config`
pub fn run_enrichment(config: &AppConfig) -> EnrichResult<EnrichmentReport> {
    info!(
        "🔄 Loading vendor data from {}...",
        config.vendor_csv_path.display()
    );
    let vendors = load_vendor_map(&config.vendor_csv_path)?;

    info!("📖 Reading {}...", config.catalog_path.display());
    let mut catalog = read_catalog(&config.catalog_path)?;

    info!("🔄 Adding vendor information to products...");
    let summary = apply_vendors(&mut catalog, &vendors, config.not_found_preview_limit);

    info!("📊 Results:");
    info!("   ✅ Updated: {} products", summary.updated);
    info!("   ⚠️  Not found: {} products", summary.not_found);

    let backup = create_backup(&config.catalog_path)?;
    info!("💾 Backup created: {}", backup.file_name());

    if let Err(e) = write_catalog(&config.catalog_path, &catalog, &backup) {
        error!(
            "❌ Catalog write failed; the pre-update catalog is preserved in {}",
            backup.path().display()
        );
        return Err(e);
    }
    info!(
        "✅ Updated catalog written to: {}",
        config.catalog_path.display()
    );

    Ok(EnrichmentReport {
        vendors_loaded: vendors.len(),
        summary,
        catalog_path: config.catalog_path.clone(),
        backup_path: backup.path().to_path_buf(),
    })
}
