//! Vendor join over the catalog products

use tracing::warn;

use crate::domain::{Catalog, ProductRecord, VendorMap};

/// Unmatched product listed in the operator preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedProduct {
    pub title: Option<String>,
    pub handle: String,
}

/// Outcome of one join pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub updated: usize,
    pub not_found: usize,
    /// First unmatched products, at most the preview limit
    pub not_found_preview: Vec<UnmatchedProduct>,
}

impl UpdateSummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.updated + self.not_found
    }
}

/// Set `vendor` on every product whose normalized handle is in `vendors`.
/// Other products are left exactly as they are.
pub fn apply_vendors(catalog: &mut Catalog, vendors: &VendorMap, preview_limit: usize) -> UpdateSummary {
    let mut summary = UpdateSummary::default();

    for product in catalog.products_mut() {
        let handle = product.normalized_handle();
        if let Some(vendor) = vendors.get(&handle) {
            product.set_vendor(vendor);
            summary.updated += 1;
            continue;
        }

        summary.not_found += 1;
        if summary.not_found <= preview_limit {
            let title = product.title().map(str::to_string);
            warn!(
                "⚠️  No vendor found for: {} (handle: {})",
                title.as_deref().unwrap_or("<untitled>"),
                handle
            );
            summary.not_found_preview.push(UnmatchedProduct { title, handle });
        }
    }

    summary
}
