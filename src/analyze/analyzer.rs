//! Structure analysis over a sampled record list

use super::types::{
    ChildTable, MergeStrategy, StructureAnalysis, MAX_CHILD_ELEMENTS_PER_RECORD, MAX_CHILD_ROWS,
    MAX_SAMPLE_RECORDS,
};
use crate::decode::flatten_record;
use crate::schema::{observe_record, FieldTypes};
use crate::types::{is_object_array, FlattenedRecord, JsonValue};
use std::collections::{HashMap, HashSet};

/// Structure analyzer with configuration options
#[derive(Debug, Clone, Default)]
pub struct StructureAnalyzer {
    /// Field names always emitted as child tables
    forced_child_fields: Vec<String>,
    /// Master field selection policy
    merge_strategy: MergeStrategy,
}

/// Child rows gathered while scanning, in discovery order
#[derive(Default)]
struct ChildAccumulator<'a> {
    tables: Vec<(String, Vec<&'a JsonValue>)>,
    index: HashMap<String, usize>,
}

impl<'a> ChildAccumulator<'a> {
    fn register(&mut self, name: &str) -> &mut Vec<&'a JsonValue> {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.index.insert(name.to_string(), self.tables.len());
                self.tables.push((name.to_string(), Vec::new()));
                self.tables.len() - 1
            }
        };
        &mut self.tables[idx].1
    }

    fn extend(&mut self, name: &str, items: &'a [JsonValue]) {
        self.register(name)
            .extend(items.iter().take(MAX_CHILD_ELEMENTS_PER_RECORD));
    }
}

impl StructureAnalyzer {
    /// Create an analyzer with no forced child tables and the `all` strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field names that must always become child tables
    #[must_use]
    pub fn with_forced_child_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forced_child_fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the master field merge strategy
    #[must_use]
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    fn is_forced(&self, name: &str) -> bool {
        self.forced_child_fields.iter().any(|f| f == name)
    }

    /// Analyze the first [`MAX_SAMPLE_RECORDS`] entries of `records`.
    ///
    /// Non-object entries are skipped. Never fails.
    pub fn analyze(&self, records: &[JsonValue]) -> StructureAnalysis {
        let sample = &records[..records.len().min(MAX_SAMPLE_RECORDS)];

        let mut children = ChildAccumulator::default();
        let mut master_types = FieldTypes::new();
        let mut master_records: Vec<FlattenedRecord> = Vec::with_capacity(sample.len());

        for record in sample {
            let Some(obj) = record.as_object() else {
                continue;
            };

            for (key, value) in obj {
                if is_object_array(value) {
                    if let Some(items) = value.as_array() {
                        children.extend(key, items);
                    }
                } else if self.is_forced(key) {
                    // Skeleton table, no rows from this record
                    children.register(key);
                }
            }

            let flat = flatten_record(obj);
            observe_record(&mut master_types, &flat);
            master_records.push(flat);
        }

        if self.merge_strategy == MergeStrategy::Common {
            if let Some(common) = common_keys(&master_records) {
                master_types.retain(&common);
            }
        }

        // Forced names never seen on any record still get a table
        for name in &self.forced_child_fields {
            children.register(name);
        }

        let child_tables: Vec<ChildTable> = children
            .tables
            .into_iter()
            .map(|(name, rows)| {
                let is_forced = self.is_forced(&name);
                materialize_child(name, &rows, is_forced)
            })
            .collect();

        tracing::debug!(
            sampled = sample.len(),
            master_rows = master_records.len(),
            master_fields = master_types.len(),
            child_tables = child_tables.len(),
            strategy = %self.merge_strategy,
            "analyzed record structure"
        );

        StructureAnalysis {
            master_fields: master_types.into_field_specs(),
            master_records,
            child_tables,
        }
    }
}

/// Analyze `records` with the given forced child fields and merge strategy
pub fn analyze_structure(
    records: &[JsonValue],
    forced_child_fields: &[String],
    merge_strategy: MergeStrategy,
) -> StructureAnalysis {
    StructureAnalyzer::new()
        .with_forced_child_fields(forced_child_fields.iter().cloned())
        .with_merge_strategy(merge_strategy)
        .analyze(records)
}

/// Keys present in every row, or `None` when there are no rows
fn common_keys(rows: &[FlattenedRecord]) -> Option<HashSet<String>> {
    let (first, rest) = rows.split_first()?;
    let mut common: HashSet<String> = first.keys().cloned().collect();
    for row in rest {
        common.retain(|key| row.contains_key(key));
    }
    Some(common)
}

fn materialize_child(name: String, rows: &[&JsonValue], is_forced: bool) -> ChildTable {
    let mut types = FieldTypes::new();
    let mut records = Vec::with_capacity(rows.len().min(MAX_CHILD_ROWS));

    for row in rows {
        // Elements after the first may be non-objects; they carry no fields
        let Some(obj) = row.as_object() else {
            continue;
        };
        let flat = flatten_record(obj);
        observe_record(&mut types, &flat);
        if records.len() < MAX_CHILD_ROWS {
            records.push(flat);
        }
    }

    ChildTable {
        name,
        fields: types.into_field_specs(),
        records,
        is_forced,
    }
}
