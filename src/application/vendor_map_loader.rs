//! Vendor map loading from the `Products.csv` export
//!
//! Only the `Handle` and `Vendor` columns are read; any other column is
//! ignored. Short rows are accepted and their missing cells read as empty.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{EnrichError, EnrichResult, VendorMap};

pub const HANDLE_COLUMN: &str = "Handle";
pub const VENDOR_COLUMN: &str = "Vendor";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load the vendor map from the CSV file at `path`
pub fn load_vendor_map(path: &Path) -> EnrichResult<VendorMap> {
    let bytes = fs::read(path).map_err(|e| EnrichError::from_read(path, e))?;
    let vendors = parse_vendor_csv(&bytes).map_err(|reason| EnrichError::malformed(path, reason))?;

    info!("✅ Loaded {} vendors from {}", vendors.len(), path.display());
    Ok(vendors)
}

/// Parse CSV bytes (optionally BOM-prefixed) into a vendor map
pub fn parse_vendor_csv(bytes: &[u8]) -> Result<VendorMap, String> {
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);

    let headers = reader
        .headers()
        .map_err(|e| format!("unreadable header row: {e}"))?
        .clone();
    if headers.is_empty() {
        return Err("missing header row".to_string());
    }

    let handle_idx = column_index(&headers, HANDLE_COLUMN);
    let vendor_idx = column_index(&headers, VENDOR_COLUMN);
    if handle_idx.is_none() || vendor_idx.is_none() {
        debug!(
            "Header row lacks '{}' or '{}'; no vendors will be loaded",
            HANDLE_COLUMN, VENDOR_COLUMN
        );
    }

    let mut vendors = VendorMap::new();
    let mut rows = 0usize;
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| format!("unreadable row: {e}"))?;
        rows += 1;

        let handle = handle_idx.and_then(|i| record.get(i)).unwrap_or("");
        let vendor = vendor_idx.and_then(|i| record.get(i)).unwrap_or("");
        if !vendors.insert(handle, vendor) {
            skipped += 1;
        }
    }

    debug!(
        "Read {} vendor rows, skipped {} without handle or vendor",
        rows, skipped
    );
    Ok(vendors)
}

/// Position of `name` in the header row; duplicate names resolve to the
/// rightmost column
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name)
        .map(|(idx, _)| idx)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_handle_and_vendor_columns() {
        let csv = "Handle,Title,Vendor\nhat-001,Red Hat,Acme\nBOOT-7 , Boot , Globex \n";
        let vendors = parse_vendor_csv(csv.as_bytes()).unwrap();
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors.get("hat-001"), Some("Acme"));
        assert_eq!(vendors.get("boot-7"), Some("Globex"));
    }

    #[test]
    fn leading_bom_is_ignored() {
        let csv = "\u{feff}Handle,Vendor\nhat-001,Acme\n";
        let vendors = parse_vendor_csv(csv.as_bytes()).unwrap();
        assert_eq!(vendors.get("hat-001"), Some("Acme"));
    }

    #[test]
    fn blank_cells_and_short_rows_are_skipped() {
        let csv = "Handle,Vendor\n,Acme\nhat-001,\nhat-002\n  ,  \nhat-003,Initech\n";
        let vendors = parse_vendor_csv(csv.as_bytes()).unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors.get("hat-003"), Some("Initech"));
    }

    #[test]
    fn duplicate_handles_last_row_wins() {
        let csv = "Handle,Vendor\nabc,X\nABC,Y\n";
        let vendors = parse_vendor_csv(csv.as_bytes()).unwrap();
        assert_eq!(vendors.get("abc"), Some("Y"));
    }

    #[test]
    fn missing_columns_yield_empty_map() {
        let csv = "Name,Brand\nhat-001,Acme\n";
        assert!(parse_vendor_csv(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn duplicate_header_uses_rightmost_column() {
        let csv = "Handle,Vendor,Vendor\nhat-001,Left,Right\n";
        let vendors = parse_vendor_csv(csv.as_bytes()).unwrap();
        assert_eq!(vendors.get("hat-001"), Some("Right"));
    }

    #[test]
    fn quoted_fields_with_commas() {
        let csv = "Handle,Vendor\n\"hat-001\",\"Acme, Inc.\"\n";
        let vendors = parse_vendor_csv(csv.as_bytes()).unwrap();
        assert_eq!(vendors.get("hat-001"), Some("Acme, Inc."));
    }

    #[test]
    fn empty_file_has_no_header() {
        assert!(parse_vendor_csv(b"").is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let bytes = b"Handle,Vendor\nhat-001,\xFF\xFE\n";
        assert!(parse_vendor_csv(bytes).is_err());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_vendor_map(&dir.path().join("Products.csv")).unwrap_err();
        assert!(matches!(err, EnrichError::FileNotFound { .. }));
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Products.csv");
        fs::write(&path, "").unwrap();
        let err = load_vendor_map(&path).unwrap_err();
        assert!(matches!(err, EnrichError::MalformedInput { .. }));
        assert!(err.to_string().contains("Products.csv"));
    }
}
