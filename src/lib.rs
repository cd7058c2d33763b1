//! Catalog Vendor Sync - add vendor names to a product catalog
//!
//! Reads vendor names per product handle from a `Products.csv` export, sets
//! them on the matching products of `valid_image_catalog.json`, backs the
//! catalog up and writes it back in place.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{EnrichmentReport, run_enrichment};
pub use domain::{EnrichError, EnrichResult};
pub use infrastructure::AppConfig;
