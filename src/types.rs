//! Common types used throughout tabspec
//!
//! Shared type aliases for the dynamically shaped JSON values the pipeline
//! works on. `serde_json` is built with `preserve_order`, so every
//! [`JsonObject`] keeps keys in insertion order.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, insertion ordered
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A record collapsed to a single level with dot-joined keys.
///
/// Values are never objects; arrays are kept intact as leaves.
pub type FlattenedRecord = JsonObject;

/// Returns true if the value is a JSON object
pub fn is_plain_object(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Object(_))
}

/// Returns true if the value is a non-empty array whose first element is an object
pub fn is_object_array(value: &JsonValue) -> bool {
    match value {
        JsonValue::Array(items) => items.first().is_some_and(is_plain_object),
        _ => false,
    }
}
