//! Spec builder tests

use super::*;
use crate::analyze::MergeStrategy;
use crate::config::SpecOptions;
use crate::schema::{FieldSpec, TypeTag};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// RecordSource Tests
// ============================================================================

#[test]
fn test_record_source_serialization() {
    assert_eq!(
        serde_json::to_value(RecordSource::root()).unwrap(),
        json!({"kind": "root", "unique_key": "id"})
    );
    assert_eq!(
        serde_json::to_value(RecordSource::child("items")).unwrap(),
        json!({"kind": "child", "path": "items", "parent_key": "id"})
    );
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_spec_envelope() {
    let payload = json!({"data": [{"id": 1}]});
    let spec = generate_spec(&payload, &SpecOptions::new().with_entity("invoice"));

    assert_eq!(spec.entity, "invoice");
    assert_eq!(spec.version, SPEC_VERSION);
    assert_eq!(spec.description, "invoice ingestion mapping");
    assert_eq!(spec.source_root, "auto");
}

#[test]
fn test_source_root_echoed_verbatim() {
    let payload = json!({"resp": {"rows": [{"id": 1}]}});
    let spec = generate_spec(&payload, &SpecOptions::new().with_source_root("resp.rows"));

    assert_eq!(spec.source_root, "resp.rows");
    assert_eq!(spec.master().unwrap().records.len(), 1);
}

#[test]
fn test_master_table_descriptor() {
    let payload = json!({"data": [{"id": 1, "name": "a"}]});
    let spec = SpecBuilder::default().build(&payload);

    let master = spec.master().unwrap();
    assert!(master.is_master());
    assert_eq!(master.key, MASTER_TABLE_KEY);
    assert_eq!(master.table_name, MASTER_TABLE_NAME);
    assert_eq!(master.app_token_key, DEFAULT_APP_TOKEN_KEY);
    assert_eq!(master.record_source, RecordSource::root());
    assert_eq!(master.is_forced, None);
    assert_eq!(master.field("name"), Some(&FieldSpec::new("name", TypeTag::Text)));
}

#[test]
fn test_child_table_descriptor() {
    let payload = json!({"result": [{"id": 1, "items": [{"sku": "A", "qty": 2}]}]});
    let spec = SpecBuilder::default().build(&payload);

    assert_eq!(spec.children().len(), 1);
    let items = spec.table("items").unwrap();
    assert!(!items.is_master());
    assert_eq!(items.table_name, "items");
    assert_eq!(items.app_token_key, DEFAULT_APP_TOKEN_KEY);
    assert_eq!(items.record_source, RecordSource::child("items"));
    assert_eq!(items.is_forced, Some(false));
}

#[test]
fn test_master_only_spec_has_no_children() {
    let spec = SpecBuilder::default().build(&json!({"data": []}));
    assert_eq!(spec.tables.len(), 1);
    assert!(spec.children().is_empty());
    assert!(spec.master().unwrap().fields.is_empty());
}

#[test]
fn test_non_json_container_payload() {
    let spec = SpecBuilder::default().build(&json!("just a string"));
    assert_eq!(spec.tables.len(), 1);
    assert!(spec.master().unwrap().records.is_empty());
}

#[test]
fn test_spec_wire_format() {
    let payload = json!({"data": [{"id": 1, "lines": [{"n": 1}]}]});
    let options = SpecOptions::new()
        .with_merge_strategy(MergeStrategy::Common)
        .with_forced_child("notes");
    let spec = generate_spec(&payload, &options);

    assert_eq!(
        spec.to_json(),
        json!({
            "entity": "order",
            "version": "2025.01.01",
            "description": "order ingestion mapping",
            "source_root": "auto",
            "tables": [
                {
                    "key": "master",
                    "table_name": "主表",
                    "app_token_key": "default",
                    "record_source": {"kind": "root", "unique_key": "id"},
                    "fields": [
                        {"target": "id", "type": "number", "source": "id"},
                        {"target": "lines", "type": "array", "source": "lines"}
                    ],
                    "records": [{"id": 1, "lines": [{"n": 1}]}]
                },
                {
                    "key": "lines",
                    "table_name": "lines",
                    "app_token_key": "default",
                    "record_source": {"kind": "child", "path": "lines", "parent_key": "id"},
                    "fields": [{"target": "n", "type": "number", "source": "n"}],
                    "records": [{"n": 1}],
                    "is_forced": false
                },
                {
                    "key": "notes",
                    "table_name": "notes",
                    "app_token_key": "default",
                    "record_source": {"kind": "child", "path": "notes", "parent_key": "id"},
                    "fields": [],
                    "records": [],
                    "is_forced": true
                }
            ]
        })
    );
}

#[test]
fn test_spec_round_trips_through_serde() {
    let payload = json!({"data": [{"id": 1, "at": "2024-01-02", "lines": [{"n": 1}]}]});
    let spec = SpecBuilder::default().build(&payload);

    let restored: Spec = serde_json::from_value(spec.to_json()).unwrap();
    assert_eq!(restored, spec);
}
