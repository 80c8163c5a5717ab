//! Spec assembly
//!
//! Runs the pipeline end to end: locate records, analyze their structure and
//! wrap the result into a [`Spec`]. Pure and synchronous; every call works only
//! on its own inputs.

use super::types::{
    RecordSource, Spec, TableSpec, DEFAULT_APP_TOKEN_KEY, MASTER_TABLE_KEY, MASTER_TABLE_NAME,
    SPEC_VERSION,
};
use crate::analyze::{ChildTable, StructureAnalysis, StructureAnalyzer};
use crate::config::SpecOptions;
use crate::decode::{locate_records, SourceRoot};
use crate::types::JsonValue;

/// Builds specs from JSON payloads
#[derive(Debug, Clone, Default)]
pub struct SpecBuilder {
    options: SpecOptions,
}

impl SpecBuilder {
    /// Create a builder with the given options
    pub fn new(options: SpecOptions) -> Self {
        Self { options }
    }

    /// Options this builder runs with
    pub fn options(&self) -> &SpecOptions {
        &self.options
    }

    /// Infer a spec from `payload`
    pub fn build(&self, payload: &JsonValue) -> Spec {
        let selector = SourceRoot::parse(&self.options.source_root);
        let records = locate_records(payload, &selector);

        let analysis = StructureAnalyzer::new()
            .with_forced_child_fields(self.options.force_child_tables.iter().cloned())
            .with_merge_strategy(self.options.merge_strategy)
            .analyze(records);

        let spec = self.assemble(analysis);

        tracing::debug!(
            entity = %spec.entity,
            located = records.len(),
            tables = spec.tables.len(),
            "built spec"
        );

        spec
    }

    fn assemble(&self, analysis: StructureAnalysis) -> Spec {
        let StructureAnalysis {
            master_fields,
            master_records,
            child_tables,
        } = analysis;

        let mut tables = Vec::with_capacity(child_tables.len() + 1);
        tables.push(TableSpec {
            key: MASTER_TABLE_KEY.to_string(),
            table_name: MASTER_TABLE_NAME.to_string(),
            app_token_key: DEFAULT_APP_TOKEN_KEY.to_string(),
            record_source: RecordSource::root(),
            fields: master_fields,
            records: master_records,
            is_forced: None,
        });
        tables.extend(child_tables.into_iter().map(child_table_spec));

        let entity = self.options.entity.clone();
        Spec {
            description: format!("{entity} ingestion mapping"),
            entity,
            version: SPEC_VERSION.to_string(),
            source_root: self.options.source_root.clone(),
            tables,
        }
    }
}

fn child_table_spec(child: ChildTable) -> TableSpec {
    TableSpec {
        key: child.name.clone(),
        table_name: child.name.clone(),
        app_token_key: DEFAULT_APP_TOKEN_KEY.to_string(),
        record_source: RecordSource::child(child.name),
        fields: child.fields,
        records: child.records,
        is_forced: Some(child.is_forced),
    }
}

/// Infer a spec from `payload` with the given options (convenience function)
pub fn generate_spec(payload: &JsonValue, options: &SpecOptions) -> Spec {
    SpecBuilder::new(options.clone()).build(payload)
}
