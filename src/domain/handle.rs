//! Product handle normalization
//!
//! Handles are slug-like identifiers shared by the vendor export and the
//! catalog. Both sides are compared after trimming surrounding whitespace and
//! lowercasing.

/// Normalize a raw handle into its join key
#[must_use]
pub fn normalize_handle(raw: &str) -> String {
    raw.trim().to_lowercase()
}
