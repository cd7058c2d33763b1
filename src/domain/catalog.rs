//! Catalog document model
//!
//! The catalog is kept as a raw JSON object so that every field the tool does
//! not touch, top-level or per product, survives a round trip unchanged and in
//! its original key order.

use serde::Serialize;
use serde_json::{Map, Value};

use super::handle::normalize_handle;

/// Top-level field holding the product sequence
pub const PRODUCTS_FIELD: &str = "products";
pub const HANDLE_FIELD: &str = "handle";
pub const TITLE_FIELD: &str = "title";
pub const VENDOR_FIELD: &str = "vendor";

/// Validated catalog document: a JSON object whose `products` field is an
/// array of objects
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    root: Map<String, Value>,
}

impl Catalog {
    /// Validate a parsed JSON document. The error is a human readable reason.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let root = match value {
            Value::Object(root) => root,
            other => {
                return Err(format!(
                    "top-level value must be an object, found {}",
                    json_kind(&other)
                ));
            }
        };

        let products = root
            .get(PRODUCTS_FIELD)
            .ok_or_else(|| format!("missing top-level '{PRODUCTS_FIELD}' field"))?;
        let Value::Array(items) = products else {
            return Err(format!(
                "'{PRODUCTS_FIELD}' must be an array, found {}",
                json_kind(products)
            ));
        };
        if let Some((index, item)) = items.iter().enumerate().find(|(_, v)| !v.is_object()) {
            return Err(format!(
                "product at index {index} must be an object, found {}",
                json_kind(item)
            ));
        }

        Ok(Self { root })
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.root
            .get(PRODUCTS_FIELD)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn products(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.root
            .get(PRODUCTS_FIELD)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    pub fn products_mut(&mut self) -> impl Iterator<Item = &mut Map<String, Value>> {
        self.root
            .get_mut(PRODUCTS_FIELD)
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

/// Field access for a single product object
pub trait ProductRecord {
    /// Normalized handle; missing or non-string handles normalize to ""
    fn normalized_handle(&self) -> String;
    fn title(&self) -> Option<&str>;
    fn vendor(&self) -> Option<&str>;
    fn set_vendor(&mut self, vendor: &str);
}

impl ProductRecord for Map<String, Value> {
    fn normalized_handle(&self) -> String {
        self.get(HANDLE_FIELD)
            .and_then(Value::as_str)
            .map(normalize_handle)
            .unwrap_or_default()
    }

    fn title(&self) -> Option<&str> {
        self.get(TITLE_FIELD).and_then(Value::as_str)
    }

    fn vendor(&self) -> Option<&str> {
        self.get(VENDOR_FIELD).and_then(Value::as_str)
    }

    fn set_vendor(&mut self, vendor: &str) {
        self.insert(VENDOR_FIELD.to_string(), Value::String(vendor.to_string()));
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
