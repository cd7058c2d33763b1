//! Application layer module
//!
//! Use cases that orchestrate the domain types over the file system.

pub mod catalog_updater;
pub mod enrichment;
pub mod vendor_map_loader;

pub use catalog_updater::{UnmatchedProduct, UpdateSummary, apply_vendors};
pub use enrichment::{EnrichmentReport, run_enrichment};
pub use vendor_map_loader::{load_vendor_map, parse_vendor_csv};
