//! Spec document types
//!
//! The serialized form of these types is the wire format consumed by the
//! downstream ingestion process.

use crate::schema::FieldSpec;
use crate::types::FlattenedRecord;
use serde::{Deserialize, Serialize};

/// Fixed spec format version
pub const SPEC_VERSION: &str = "2025.01.01";

/// Key of the master table
pub const MASTER_TABLE_KEY: &str = "master";

/// Display name of the master table, matched literally by downstream consumers
pub const MASTER_TABLE_NAME: &str = "主表";

/// Key the master table is uniquely identified by, and children join on
pub const DEFAULT_UNIQUE_KEY: &str = "id";

/// Opaque grouping token passed through to downstream consumers
pub const DEFAULT_APP_TOKEN_KEY: &str = "default";

/// How a table's rows relate to the original payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordSource {
    /// Rows are the located top-level records
    Root {
        /// Field identifying a master row
        unique_key: String,
    },
    /// Rows come from the named array field of each root record
    Child {
        /// Array field on the root record
        path: String,
        /// Master field the rows link back to
        parent_key: String,
    },
}

impl RecordSource {
    /// Root source keyed on [`DEFAULT_UNIQUE_KEY`]
    pub fn root() -> Self {
        RecordSource::Root {
            unique_key: DEFAULT_UNIQUE_KEY.to_string(),
        }
    }

    /// Child source for the array field `path`, joined on [`DEFAULT_UNIQUE_KEY`]
    pub fn child(path: impl Into<String>) -> Self {
        RecordSource::Child {
            path: path.into(),
            parent_key: DEFAULT_UNIQUE_KEY.to_string(),
        }
    }

    /// Check whether this is the root source
    pub fn is_root(&self) -> bool {
        matches!(self, RecordSource::Root { .. })
    }
}

/// Descriptor of one output table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Stable table key
    pub key: String,

    /// Table display name
    pub table_name: String,

    /// Grouping token, never interpreted here
    pub app_token_key: String,

    /// Row provenance
    pub record_source: RecordSource,

    /// Columns in first-seen order
    pub fields: Vec<FieldSpec>,

    /// Sampled flattened rows
    #[serde(default)]
    pub records: Vec<FlattenedRecord>,

    /// Whether the caller forced this table (child tables only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_forced: Option<bool>,
}

impl TableSpec {
    /// Check whether this is the master table
    pub fn is_master(&self) -> bool {
        self.record_source.is_root()
    }

    /// Look up a field by target name
    pub fn field(&self, target: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.target == target)
    }
}

/// The complete ingestion spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    /// Kind of data being mapped
    pub entity: String,

    /// Spec format version
    pub version: String,

    /// Human readable description
    pub description: String,

    /// Selector the records were located with, as supplied
    pub source_root: String,

    /// Master table first, then child tables in discovery order
    pub tables: Vec<TableSpec>,
}

impl Spec {
    /// The master table
    pub fn master(&self) -> Option<&TableSpec> {
        self.tables.first()
    }

    /// Child tables in discovery order
    pub fn children(&self) -> &[TableSpec] {
        self.tables.get(1..).unwrap_or_default()
    }

    /// Find a table by key
    pub fn table(&self, key: &str) -> Option<&TableSpec> {
        self.tables.iter().find(|t| t.key == key)
    }

    /// Serialize to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
