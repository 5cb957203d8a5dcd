//! Integration tests for the Gateway service

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use docsift_gateway::{
    config::GatewayConfig,
    handlers::{create_router, AppState, Envelope, ErrorResponse, HealthCheckResponse},
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

/// Helper to create test application state
fn create_test_state() -> AppState {
    AppState::from_config(&GatewayConfig::default_local_config()).unwrap()
}

fn write_document(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_json(app: Router, uri: &str) -> Value {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_router(create_test_state());

    let health: HealthCheckResponse = serde_json::from_value(get_json(app, "/health").await).unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.documents_recorded, 0);
    assert_eq!(health.analyses_recorded, 0);
}

#[tokio::test]
async fn test_process_text_document() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "test.txt", "hello world");
    let app = create_router(create_test_state());

    let (status, body) = post_json(app, "/process", json!({ "document_path": path })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["metadata"]["path"], path);
    assert_eq!(body["metadata"]["size"], 11);
    assert_eq!(body["metadata"]["encoding"], "utf-8");
    assert_eq!(body["parsed_content"]["type"], "TEXT");
    assert_eq!(body["parsed_content"]["word_count"], 2);
    assert_eq!(body["parsed_content"]["line_count"], 1);
}

#[tokio::test]
async fn test_process_missing_document_is_ok_with_failure() {
    let app = create_router(create_test_state());

    let (status, body) = post_json(
        app,
        "/process",
        json!({ "document_path": "/nonexistent/missing.txt" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("/nonexistent/missing.txt"));
}

#[tokio::test]
async fn test_process_without_path() {
    let app = create_router(create_test_state());

    let (status, body) = post_json(app, "/process", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error, "document_path is required");
}

#[tokio::test]
async fn test_analyze_content() {
    let app = create_router(create_test_state());

    let (status, body) = post_json(
        app,
        "/analyze",
        json!({ "document_data": { "content": "Machine learning is great." } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["analysis_count"], 3);
    assert!(body["id"].is_string());
    assert!(body["timestamp"].is_string());
    assert_eq!(body["analyses"][0]["analysis_type"], "sentiment");
    assert_eq!(body["analyses"][0]["sentiment"], "positive");
    assert_eq!(body["analyses"][1]["analysis_type"], "entity_extraction");
    assert_eq!(body["analyses"][2]["analysis_type"], "keyword_extraction");
}

#[tokio::test]
async fn test_analyze_empty_content() {
    let app = create_router(create_test_state());

    let (status, body) = post_json(app, "/analyze", json!({ "document_data": { "content": "" } })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No content provided for analysis");
}

#[tokio::test]
async fn test_analyze_without_data() {
    let app = create_router(create_test_state());

    let (status, body) = post_json(app, "/analyze", json!({ "document_data": {} })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "document_data is required");
}

#[tokio::test]
async fn test_invoke_process_envelope() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "doc.txt", "one two three");
    let app = create_router(create_test_state());

    let (status, body) = post_json(app, "/invoke/process", json!({ "document_path": path })).await;
    assert_eq!(status, StatusCode::OK);

    let envelope: Envelope = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.status_code, 200);
    let record: Value = serde_json::from_str(&envelope.body).unwrap();
    assert_eq!(record["parsed_content"]["word_count"], 3);
}

#[tokio::test]
async fn test_invoke_analyze_envelope_bad_request() {
    let app = create_router(create_test_state());

    let (status, body) = post_json(app, "/invoke/analyze", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let envelope: Envelope = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.status_code, 400);
    assert_eq!(envelope.body, r#"{"error":"document_data is required"}"#);
}

#[tokio::test]
async fn test_history_is_shared_across_requests() {
    let dir = TempDir::new().unwrap();
    let good = write_document(&dir, "good.txt", "hello world");
    let empty = write_document(&dir, "empty.txt", "");
    let state = create_test_state();

    post_json(create_router(state.clone()), "/process", json!({ "document_path": good })).await;
    post_json(create_router(state.clone()), "/process", json!({ "document_path": empty })).await;
    post_json(
        create_router(state.clone()),
        "/analyze",
        json!({ "document_data": { "content": "first" } }),
    )
    .await;
    post_json(
        create_router(state.clone()),
        "/analyze",
        json!({ "document_data": { "content": "" } }),
    )
    .await;

    let documents = get_json(create_router(state.clone()), "/history/documents").await;
    assert_eq!(documents.as_array().unwrap().len(), 1);
    assert_eq!(documents[0]["metadata"]["path"], good);

    let analyses = get_json(create_router(state.clone()), "/history/analyses").await;
    assert_eq!(analyses.as_array().unwrap().len(), 1);
    assert_eq!(analyses[0]["analysis_count"], 3);

    let health: HealthCheckResponse =
        serde_json::from_value(get_json(create_router(state), "/health").await).unwrap();
    assert_eq!(health.documents_recorded, 1);
    assert_eq!(health.analyses_recorded, 1);
}

#[tokio::test]
async fn test_history_capacity_bounds_log() {
    let config = GatewayConfig {
        history_capacity: 2,
        ..GatewayConfig::default_local_config()
    };
    let state = AppState::from_config(&config).unwrap();

    for text in ["one", "two", "three"] {
        post_json(
            create_router(state.clone()),
            "/analyze",
            json!({ "document_data": { "content": text } }),
        )
        .await;
    }

    let analyses = get_json(create_router(state), "/history/analyses").await;
    assert_eq!(analyses.as_array().unwrap().len(), 2);
}
