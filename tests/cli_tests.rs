//! File-based CLI helper tests

use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tabspec::cli::{apply_overrides, read_input, render, OutputFormat};
use tabspec::decode::InputFormat;
use tabspec::{generate_spec, MergeStrategy, SpecOptions};
use tempfile::tempdir;

#[test]
fn test_read_input_detects_format_from_extension() {
    let dir = tempdir().unwrap();

    let json_path = dir.path().join("orders.json");
    fs::write(&json_path, r#"{"data": [{"id": 1}]}"#).unwrap();
    assert_eq!(read_input(&json_path, None).unwrap(), json!({"data": [{"id": 1}]}));

    let jsonl_path = dir.path().join("orders.jsonl");
    fs::write(&jsonl_path, "{\"id\": 1}\n{\"id\": 2}\n").unwrap();
    assert_eq!(
        read_input(&jsonl_path, None).unwrap(),
        json!([{"id": 1}, {"id": 2}])
    );

    let yaml_path = dir.path().join("orders.yaml");
    fs::write(&yaml_path, "items:\n  - id: 1\n").unwrap();
    assert_eq!(read_input(&yaml_path, None).unwrap(), json!({"items": [{"id": 1}]}));
}

#[test]
fn test_read_input_explicit_format_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payload.json");
    fs::write(&path, "{\"id\": 1}\n{\"id\": 2}\n").unwrap();

    assert_eq!(
        read_input(&path, Some(InputFormat::Jsonl)).unwrap(),
        json!([{"id": 1}, {"id": 2}])
    );
    assert!(read_input(&path, None).is_err());
}

#[test]
fn test_read_input_sniffs_uninformative_extensions() {
    let dir = tempdir().unwrap();

    let tsv_path = dir.path().join("export.txt");
    fs::write(&tsv_path, "id\tcity\n1\tOslo\n2\tLima\n").unwrap();
    assert_eq!(
        read_input(&tsv_path, None).unwrap(),
        json!([{"id": "1", "city": "Oslo"}, {"id": "2", "city": "Lima"}])
    );

    let log_path = dir.path().join("access");
    fs::write(&log_path, "path=/a status=200\npath=/b status=404\n").unwrap();
    assert_eq!(
        read_input(&log_path, None).unwrap(),
        json!([{"path": "/a", "status": 200}, {"path": "/b", "status": 404}])
    );
}

#[test]
fn test_read_input_tsv_extension() {
    let dir = tempdir().unwrap();

    let tsv_path = dir.path().join("orders.tsv");
    fs::write(&tsv_path, "id\tnote\n7\tkey=value inside a cell\n").unwrap();
    let payload = read_input(&tsv_path, None).unwrap();
    assert_eq!(payload, json!([{"id": "7", "note": "key=value inside a cell"}]));

    let spec = generate_spec(&payload, &SpecOptions::default());
    assert_eq!(spec.tables.len(), 1);
    assert_eq!(spec.tables[0].fields.len(), 2);
}

#[test]
fn test_read_input_missing_file() {
    let dir = tempdir().unwrap();
    let err = read_input(&dir.path().join("nope.json"), None).unwrap_err();
    assert!(err.to_string().contains("File not found"));
}

#[test]
fn test_options_file_with_flag_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.yaml");
    fs::write(
        &path,
        "entity: invoice\nsource_root: body.list\nforce_child_tables: [notes]\n",
    )
    .unwrap();

    let mut options = SpecOptions::from_file(&path).unwrap();
    apply_overrides(
        &mut options,
        Some("bill"),
        None,
        Some(MergeStrategy::Common),
        &["attachments".to_string(), String::new()],
    );

    assert_eq!(
        options,
        SpecOptions::new()
            .with_entity("bill")
            .with_source_root("body.list")
            .with_merge_strategy(MergeStrategy::Common)
            .with_forced_child("notes")
            .with_forced_child("attachments")
    );
}

#[test]
fn test_render_formats() {
    let spec = generate_spec(&json!([{"id": 1}]), &SpecOptions::default());

    let compact = render(&spec, OutputFormat::Json).unwrap();
    assert!(!compact.contains('\n'));
    assert_eq!(serde_json::from_str::<serde_json::Value>(&compact).unwrap(), spec.to_json());

    let pretty = render(&spec, OutputFormat::Pretty).unwrap();
    assert!(pretty.contains("\n  \"entity\": \"order\""));

    let yaml = render(&spec, OutputFormat::Yaml).unwrap();
    assert!(yaml.contains("entity: order"));
    assert!(yaml.contains("kind: root"));
}
