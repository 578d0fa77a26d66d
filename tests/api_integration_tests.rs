//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::thread::sleep;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use ttl_cache::{api::create_router, AppState, TtlCache};

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(TtlCache::new(Duration::from_secs(300))))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sends a request and returns the status with the parsed JSON body.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "test_key", "value": "test_value"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("test_key"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/set")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_empty_key_request() {
    let app = create_test_app();

    let (status, json) = send(&app, "PUT", "/set", Some(json!({"key": "", "value": 1}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_slash_key_request() {
    let app = create_test_app();

    let (status, json) = send(&app, "PUT", "/set", Some(json!({"key": "a/b", "value": 1}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains('/'));

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 0);
}

// == GET / HAS Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_structured_value() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "user", "value": {"name": "ada", "tags": [1, 2]}})),
    )
    .await;

    let (status, json) = send(&app, "GET", "/get/user", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "user");
    assert_eq!(json["value"], json!({"name": "ada", "tags": [1, 2]}));
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/get/nonexistent_key", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_overwrite_via_api() {
    let app = create_test_app();

    send(&app, "PUT", "/set", Some(json!({"key": "k", "value": "v1"}))).await;
    send(&app, "PUT", "/set", Some(json!({"key": "k", "value": "v2"}))).await;

    let (_, json) = send(&app, "GET", "/get/k", None).await;
    assert_eq!(json["value"], "v2");

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 1);
}

#[tokio::test]
async fn test_has_endpoint() {
    let app = create_test_app();

    send(&app, "PUT", "/set", Some(json!({"key": "here", "value": null}))).await;

    let (_, json) = send(&app, "GET", "/has/here", None).await;
    assert_eq!(json["present"], true);

    let (_, json) = send(&app, "GET", "/has/missing", None).await;
    assert_eq!(json["present"], false);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint() {
    let app = create_test_app();

    send(&app, "PUT", "/set", Some(json!({"key": "delete_key", "value": 1}))).await;

    let (status, _) = send(&app, "DELETE", "/del/delete_key", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/get/delete_key", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/del/delete_key", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == CLEAR / CLEANUP Endpoint Tests ==

#[tokio::test]
async fn test_clear_endpoint() {
    let app = create_test_app();

    for (key, value) in [("a", "1"), ("b", "2"), ("c", "3")] {
        send(&app, "PUT", "/set", Some(json!({"key": key, "value": value}))).await;
    }
    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 3);

    let (status, json) = send(&app, "POST", "/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], 3);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 0);
    for key in ["a", "b", "c"] {
        let (status, _) = send(&app, "GET", &format!("/get/{}", key), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_cleanup_endpoint() {
    let app = create_test_app();

    send(&app, "PUT", "/set", Some(json!({"key": "zero", "value": 0, "ttl_ms": 0}))).await;
    send(&app, "PUT", "/set", Some(json!({"key": "fresh", "value": 1}))).await;

    // Expired but not yet purged
    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 2);

    let (status, json) = send(&app, "POST", "/cleanup", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], 1);

    let (_, json) = send(&app, "POST", "/cleanup", None).await;
    assert_eq!(json["removed"], 0);

    let (status, _) = send(&app, "GET", "/get/fresh", None).await;
    assert_eq!(status, StatusCode::OK);
}

// == Stats / Health Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();

    send(&app, "PUT", "/set", Some(json!({"key": "stats_key", "value": 1}))).await;
    send(&app, "GET", "/get/stats_key", None).await;
    send(&app, "GET", "/get/nonexistent", None).await;

    let (status, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

// == TTL Tests ==

#[tokio::test]
async fn test_ttl_expiration_via_api() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "short", "value": "x", "ttl_ms": 500})),
    )
    .await;
    send(
        &app,
        "PUT",
        "/set",
        Some(json!({"key": "long", "value": "y", "ttl_ms": 2000})),
    )
    .await;

    let (status, _) = send(&app, "GET", "/get/short", None).await;
    assert_eq!(status, StatusCode::OK);

    sleep(Duration::from_millis(700));

    let (status, _) = send(&app, "GET", "/get/short", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, json) = send(&app, "GET", "/has/short", None).await;
    assert_eq!(json["present"], false);

    let (status, json) = send(&app, "GET", "/get/long", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], "y");
}
