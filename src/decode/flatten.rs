//! Record flattening
//!
//! Collapses nested objects into a single level with dot-joined keys.
//! Arrays are leaves and are never descended into.

use crate::types::{FlattenedRecord, JsonObject, JsonValue};

/// Flatten a record value. Anything that is not an object yields an empty record.
pub fn flatten_value(value: &JsonValue) -> FlattenedRecord {
    match value {
        JsonValue::Object(obj) => flatten_record(obj),
        _ => FlattenedRecord::new(),
    }
}

/// Flatten an object into dotted-path keys
pub fn flatten_record(obj: &JsonObject) -> FlattenedRecord {
    let mut out = FlattenedRecord::new();
    flatten_into(obj, "", &mut out);
    out
}

// Recursion depth follows input nesting. Parsed documents are already bounded
// by serde_json's recursion limit.
fn flatten_into(obj: &JsonObject, prefix: &str, out: &mut FlattenedRecord) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            JsonValue::Object(nested) => flatten_into(nested, &path, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}
