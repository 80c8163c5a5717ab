//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Semantic type of a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// Any JSON number
    Number,
    /// Strings, booleans, null and objects
    Text,
    /// ISO-8601 style date or datetime string
    Datetime,
    /// JSON array
    Array,
}

impl TypeTag {
    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::Text => "text",
            TypeTag::Datetime => "datetime",
            TypeTag::Array => "array",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single column of a table spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Destination column name
    pub target: String,

    /// Inferred semantic type
    #[serde(rename = "type")]
    pub field_type: TypeTag,

    /// Flattened source key
    pub source: String,
}

impl FieldSpec {
    /// Create a field whose target and source are the same flattened key
    pub fn new(name: impl Into<String>, field_type: TypeTag) -> Self {
        let name = name.into();
        Self {
            target: name.clone(),
            field_type,
            source: name,
        }
    }
}

/// Ordered field name to type mapping where the first observed type wins.
///
/// Later observations of a known key never change its type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTypes {
    fields: Vec<(String, TypeTag)>,
    index: HashMap<String, usize>,
}

impl FieldTypes {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a type for `name` unless one is already fixed.
    ///
    /// Returns true if the key was new.
    pub fn observe(&mut self, name: &str, field_type: TypeTag) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.fields.len());
        self.fields.push((name.to_string(), field_type));
        true
    }

    /// Type fixed for `name`, if any
    pub fn get(&self, name: &str) -> Option<TypeTag> {
        self.index.get(name).map(|&i| self.fields[i].1)
    }

    /// Check whether a key has been seen
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Keep only the keys in `keep`, preserving first-seen order and types
    pub fn retain(&mut self, keep: &HashSet<String>) {
        self.fields.retain(|(name, _)| keep.contains(name));
        self.index = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
    }

    /// Number of known fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been observed
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Convert into field specs in first-seen order
    pub fn into_field_specs(self) -> Vec<FieldSpec> {
        self.fields
            .into_iter()
            .map(|(name, field_type)| FieldSpec::new(name, field_type))
            .collect()
    }
}
