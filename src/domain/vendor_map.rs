//! Vendor lookup table built from the vendor export

use std::collections::HashMap;

use super::handle::normalize_handle;

/// Normalized product handle -> vendor name
///
/// Keys are always normalized and values trimmed; empty keys or values are
/// never stored. Inserting an existing handle replaces the vendor (last wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorMap {
    entries: HashMap<String, String>,
}

impl VendorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw handle/vendor pair. Returns false when either side is blank
    /// after normalization and nothing was stored.
    pub fn insert(&mut self, handle: &str, vendor: &str) -> bool {
        let key = normalize_handle(handle);
        let vendor = vendor.trim();
        if key.is_empty() || vendor.is_empty() {
            return false;
        }
        self.entries.insert(key, vendor.to_string());
        true
    }

    /// Look up a vendor by an already normalized handle
    #[must_use]
    pub fn get(&self, normalized_handle: &str) -> Option<&str> {
        self.entries.get(normalized_handle).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: AsRef<str>, V: AsRef<str>> FromIterator<(H, V)> for VendorMap {
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (handle, vendor) in iter {
            map.insert(handle.as_ref(), vendor.as_ref());
        }
        map
    }
}
