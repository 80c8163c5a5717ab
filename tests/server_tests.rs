//! HTTP endpoint tests
//!
//! Drives the router in-process without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tabspec::cli::{build_router, MAX_BODY_BYTES};
use tower::ServiceExt;

async fn post_json(path: &str, body: String) -> (StatusCode, Value) {
    post(path, Some("application/json"), body).await
}

async fn post(path: &str, content_type: Option<&str>, body: String) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(Method::POST).uri(path);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = build_router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = build_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_generate_success_with_defaults() {
    let body = json!({
        "json_data": {"result": [{"id": 1, "items": [{"sku": "A", "qty": 2}]}]}
    });
    let (status, response) = post_json("/api/spec/generate", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let spec = &response["spec"];
    assert_eq!(spec["entity"], "order");
    assert_eq!(spec["source_root"], "auto");
    assert_eq!(spec["version"], "2025.01.01");
    assert_eq!(spec["tables"][0]["key"], "master");
    assert_eq!(spec["tables"][1]["key"], "items");
    assert_eq!(spec["tables"][1]["is_forced"], false);
}

#[tokio::test]
async fn test_generate_with_options() {
    let body = json!({
        "json_data": {"rows": [{"id": 1, "a": 1}, {"id": 2}]},
        "entity": "ticket",
        "source_root": "rows",
        "merge_strategy": "common",
        "force_child_tables": ["comments"]
    });
    let (status, response) = post_json("/api/spec/generate", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let spec = &response["spec"];
    assert_eq!(spec["entity"], "ticket");
    assert_eq!(spec["description"], "ticket ingestion mapping");
    assert_eq!(
        spec["tables"][0]["fields"],
        json!([{"target": "id", "type": "number", "source": "id"}])
    );
    assert_eq!(spec["tables"][1]["key"], "comments");
    assert_eq!(spec["tables"][1]["is_forced"], true);
    assert_eq!(spec["tables"][1]["fields"], json!([]));
}

#[tokio::test]
async fn test_generate_unknown_merge_strategy_falls_back_to_all() {
    let body = json!({
        "json_data": [{"id": 1, "a": 1}, {"id": 2}],
        "merge_strategy": "union"
    });
    let (status, response) = post_json("/api/spec/generate", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["spec"]["tables"][0]["fields"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_generate_missing_json_data() {
    let (status, response) = post_json("/api/spec/generate", json!({"entity": "x"}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({"error": "missing json_data"}));
}

#[tokio::test]
async fn test_generate_null_json_data() {
    let (status, response) =
        post_json("/api/spec/generate", json!({"json_data": null}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "missing json_data");
}

#[tokio::test]
async fn test_generate_malformed_body() {
    let (status, response) = post_json("/api/spec/generate", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid request body"));
}

#[tokio::test]
async fn test_generate_ignores_content_type() {
    let body = json!({"json_data": {"list": [{"id": 7, "name": "x"}]}}).to_string();

    for content_type in [Some("text/plain"), Some("application/x-www-form-urlencoded"), None] {
        let (status, response) = post("/api/spec/generate", content_type, body.clone()).await;

        assert_eq!(status, StatusCode::OK, "content type {content_type:?}");
        assert_eq!(
            response["spec"]["tables"][0]["fields"],
            json!([
                {"target": "id", "type": "number", "source": "id"},
                {"target": "name", "type": "text", "source": "name"}
            ])
        );
    }
}

#[tokio::test]
async fn test_generate_accepts_bodies_over_two_megabytes() {
    let records: Vec<Value> = (0..30_000)
        .map(|i| {
            json!({
                "id": i,
                "created_at": "2024-01-02 03:04:05",
                "note": "padding padding padding padding",
                "lines": [{"sku": format!("SKU-{i}"), "qty": 1}]
            })
        })
        .collect();
    let body = json!({"json_data": {"data": records}}).to_string();
    assert!(body.len() > 2 * 1024 * 1024);

    let (status, response) = post_json("/api/spec/generate", body).await;

    assert_eq!(status, StatusCode::OK);
    let tables = response["spec"]["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0]["records"].as_array().unwrap().len(), 200);
    assert_eq!(tables[1]["key"], "lines");
}

#[tokio::test]
async fn test_generate_rejects_oversized_body() {
    let body = " ".repeat(MAX_BODY_BYTES + 1);
    let (status, response) = post_json("/api/spec/generate", body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .contains("length limit exceeded"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/spec/generate")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = build_router().oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
