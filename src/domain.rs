//! Domain module - catalog, vendor map and handle rules
//!
//! Pure data types with no file system access. The application layer wires
//! them to the infrastructure.

pub mod catalog;
pub mod errors;
pub mod handle;
pub mod vendor_map;

pub use catalog::{Catalog, ProductRecord};
pub use errors::{EnrichError, EnrichResult};
pub use handle::normalize_handle;
pub use vendor_map::VendorMap;
