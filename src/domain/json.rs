//! The single lenient-parse policy for stored JSON sub-documents.
//!
//! Sections, home sections and pages carry serialized JSON blobs that are
//! edited by hand in the admin surface. Malformed content must degrade to an
//! empty value at read time instead of failing the request, and that fallback
//! lives here so it is one auditable policy rather than scattered `unwrap_or`
//! calls.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parse `raw` into `T`, substituting `T::default()` when the text is empty,
/// malformed, or describes a different JSON shape.
pub fn parse_or_default<T>(raw: &str) -> T
where
    T: DeserializeOwned + Default,
{
    if raw.trim().is_empty() {
        return T::default();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

/// Parse `raw` as a JSON object, degrading to `{}` on any failure.
pub fn object_or_empty(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Parse `raw` as a JSON array, degrading to `[]` on any failure.
pub fn array_or_empty(raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}
