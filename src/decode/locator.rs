//! Record list location
//!
//! Finds the list of candidate records inside an arbitrarily shaped payload.
//! Location never fails: unexpected shapes fall through to an empty list.

use super::types::SourceRoot;
use crate::types::JsonValue;

/// Container keys checked in auto mode, in priority order
pub const CANDIDATE_KEYS: &[&str] = &[
    "data",
    "result",
    "results",
    "list",
    "items",
    "records",
    "rows",
    "content",
    "value",
    "values",
    "payload",
    "body",
    "response",
    "object",
    "node",
    "nodes",
    "edges",
    "hits",
    "documents",
    "page",
    "dataset",
    "entry",
    "resource",
    "resources",
    "info",
    "detail",
    "output",
    "meta",
    "contentData",
    "dataList",
    "resultList",
    "resultSet",
    "dataSet",
];

/// Locate the record list in `root`.
///
/// Tries the selector first, then falls back to the first array-valued field
/// of a root object, then to the root itself if it is an array.
pub fn locate_records<'a>(root: &'a JsonValue, source_root: &SourceRoot) -> &'a [JsonValue] {
    let located = match source_root {
        SourceRoot::Auto => locate_auto(root),
        SourceRoot::Path(parts) => locate_path(root, parts),
    };

    if let Some(records) = located {
        return records;
    }

    tracing::debug!(selector = %source_root, "selector found no array, using fallback");
    locate_fallback(root)
}

fn locate_auto(root: &JsonValue) -> Option<&[JsonValue]> {
    match root {
        JsonValue::Object(obj) => CANDIDATE_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(JsonValue::as_array))
            .map(Vec::as_slice),
        JsonValue::Array(items) => Some(items.as_slice()),
        _ => None,
    }
}

fn locate_path<'a>(root: &'a JsonValue, parts: &[String]) -> Option<&'a [JsonValue]> {
    let mut current = root;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    current.as_array().map(Vec::as_slice)
}

fn locate_fallback(root: &JsonValue) -> &[JsonValue] {
    match root {
        JsonValue::Object(obj) => obj
            .values()
            .find_map(JsonValue::as_array)
            .map_or(&[][..], Vec::as_slice),
        JsonValue::Array(items) => items.as_slice(),
        _ => &[],
    }
}
