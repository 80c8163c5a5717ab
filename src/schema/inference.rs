//! Type inference from JSON values

use super::types::{FieldTypes, TypeTag};
use crate::types::{FlattenedRecord, JsonValue};
use once_cell::sync::Lazy;
use regex::Regex;

// Date, optionally followed by a time with fractional seconds and a zone offset.
// A single trailing newline is tolerated.
static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(?:[ T][0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?(?:Z|[+-][0-9]{2}:?[0-9]{2})?)?\n?$",
    )
    .expect("datetime pattern is valid")
});

/// Classify a single value into a semantic type.
///
/// Total over every JSON value: null, booleans, objects and any string that
/// is not an ISO-8601 style date/datetime all map to [`TypeTag::Text`].
pub fn detect_type(value: &JsonValue) -> TypeTag {
    match value {
        JsonValue::Number(_) => TypeTag::Number,
        JsonValue::Array(_) => TypeTag::Array,
        JsonValue::String(s) if is_datetime(s) => TypeTag::Datetime,
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::String(_) | JsonValue::Object(_) => {
            TypeTag::Text
        }
    }
}

/// Check whether a string looks like a date or datetime
pub fn is_datetime(s: &str) -> bool {
    DATETIME_REGEX.is_match(s)
}

/// Fix the type of every key in `record` that `types` has not seen yet.
///
/// Returns the number of newly discovered keys.
pub fn observe_record(types: &mut FieldTypes, record: &FlattenedRecord) -> usize {
    let mut discovered = 0;
    for (key, value) in record {
        if !types.contains(key) {
            types.observe(key, detect_type(value));
            discovered += 1;
        }
    }
    discovered
}
