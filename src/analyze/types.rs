//! Structure analysis types

use crate::schema::FieldSpec;
use crate::types::FlattenedRecord;
use serde::{Deserialize, Serialize};

/// Maximum number of top-level records examined
pub const MAX_SAMPLE_RECORDS: usize = 200;

/// Maximum number of child-array elements taken from a single record
pub const MAX_CHILD_ELEMENTS_PER_RECORD: usize = 50;

/// Maximum number of flattened rows retained per child table
pub const MAX_CHILD_ROWS: usize = 200;

/// Policy for selecting master table fields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MergeStrategy {
    /// Union of every field seen across the sample
    #[default]
    All,
    /// Only fields present in every sampled record
    Common,
}

impl MergeStrategy {
    /// Parse leniently: only `common` selects [`MergeStrategy::Common`]
    pub fn parse(s: &str) -> Self {
        if s == "common" {
            MergeStrategy::Common
        } else {
            MergeStrategy::All
        }
    }

    /// Wire name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::All => "all",
            MergeStrategy::Common => "common",
        }
    }
}

impl From<String> for MergeStrategy {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child table discovered during analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ChildTable {
    /// Name of the array field on the parent records
    pub name: String,
    /// Fields in first-seen order
    pub fields: Vec<FieldSpec>,
    /// Flattened rows, at most [`MAX_CHILD_ROWS`]
    pub records: Vec<FlattenedRecord>,
    /// Whether the caller forced this table
    pub is_forced: bool,
}

/// Result of analyzing a record list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureAnalysis {
    /// Master fields in first-seen order, after the merge strategy
    pub master_fields: Vec<FieldSpec>,
    /// Flattened master rows, at most [`MAX_SAMPLE_RECORDS`]
    pub master_records: Vec<FlattenedRecord>,
    /// Child tables in first-discovered order
    pub child_tables: Vec<ChildTable>,
}

impl StructureAnalysis {
    /// Find a child table by name
    pub fn child(&self, name: &str) -> Option<&ChildTable> {
        self.child_tables.iter().find(|c| c.name == name)
    }
}
