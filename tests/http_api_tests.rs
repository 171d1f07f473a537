//! Integration tests for the todo REST API.
//!
//! These tests drive the axum router in-process with an in-memory repository,
//! covering the CRUD contract end-to-end: request parsing, repository calls,
//! and status-code mapping.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Local, NaiveDateTime};
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_rust::db::repositories::LocalRepository;
use todo_rust::db::repository::TodoRepository;
use todo_rust::http::{create_router, AppState};

// =========================================================
// Helpers
// =========================================================

fn test_app() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn TodoRepository>;
    create_router(AppState::new(repo))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn parse_created_at(json: &serde_json::Value) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(json["createdAt"].as_str().unwrap(), "%Y-%m-%dT%H:%M:%S%.f")
        .unwrap()
}

// =========================================================
// Create
// =========================================================

#[tokio::test]
async fn test_create_returns_201_with_defaults() {
    let app = test_app();

    let before = Local::now().naive_local();
    let response = send(&app, Method::POST, "/api/todos", Some(r#"{"text":"Buy milk"}"#)).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["completed"], false);
    assert!(parse_created_at(&json) >= before);
}

#[tokio::test]
async fn test_create_overrides_client_supplied_fields() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/todos",
        Some(r#"{"text":"Buy milk","id":99,"completed":true,"createdAt":"1999-01-01T00:00:00"}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["completed"], false);
    assert_ne!(json["createdAt"], "1999-01-01T00:00:00");
}

#[tokio::test]
async fn test_create_accepts_empty_and_missing_text() {
    let app = test_app();

    let response = send(&app, Method::POST, "/api/todos", Some(r#"{"text":""}"#)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["text"], "");

    let response = send(&app, Method::POST, "/api/todos", Some("{}")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["text"], "");
}

// =========================================================
// Read
// =========================================================

#[tokio::test]
async fn test_list_empty() {
    let app = test_app();

    let response = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_returns_created_todos() {
    let app = test_app();

    for text in ["one", "two", "three"] {
        let body = format!(r#"{{"text":"{}"}}"#, text);
        send(&app, Method::POST, "/api/todos", Some(&body)).await;
    }

    let response = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn test_get_round_trips_created_todo() {
    let app = test_app();

    let created = send(&app, Method::POST, "/api/todos", Some(r#"{"text":"Buy milk"}"#)).await;
    let created = body_json(created).await;

    let response = send(&app, Method::GET, "/api/todos/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_get_missing_returns_404_with_empty_body() {
    let app = test_app();

    let response = send(&app, Method::GET, "/api/todos/42", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// =========================================================
// Update
// =========================================================

#[tokio::test]
async fn test_update_preserves_id_and_created_at() {
    let app = test_app();

    let created = send(&app, Method::POST, "/api/todos", Some(r#"{"text":"Buy milk"}"#)).await;
    let created = body_json(created).await;

    let response = send(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(r#"{"text":"Buy milk","completed":true}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["text"], "Buy milk");
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_missing_returns_404_with_empty_body() {
    let app = test_app();

    let response = send(
        &app,
        Method::PUT,
        "/api/todos/42",
        Some(r#"{"text":"nope","completed":false}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// =========================================================
// Delete
// =========================================================

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let app = test_app();

    send(&app, Method::POST, "/api/todos", Some(r#"{"text":"ephemeral"}"#)).await;

    let response = send(&app, Method::DELETE, "/api/todos/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, Method::GET, "/api/todos/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_returns_404_with_empty_body() {
    let app = test_app();

    let response = send(&app, Method::DELETE, "/api/todos/42", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

// =========================================================
// Full Scenario
// =========================================================

#[tokio::test]
async fn test_create_update_delete_scenario() {
    let app = test_app();

    // POST {"text":"Buy milk"} -> 201 with fresh id and defaults
    let response = send(&app, Method::POST, "/api/todos", Some(r#"{"text":"Buy milk"}"#)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["completed"], false);

    // PUT /1 marking it complete -> 200, createdAt untouched
    let response = send(
        &app,
        Method::PUT,
        "/api/todos/1",
        Some(r#"{"text":"Buy milk","completed":true}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // DELETE /1 -> 204
    let response = send(&app, Method::DELETE, "/api/todos/1", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // GET /1 -> 404
    let response = send(&app, Method::GET, "/api/todos/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================
// Health
// =========================================================

#[tokio::test]
async fn test_health_check_reports_connected() {
    let app = test_app();

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "connected");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = test_app();

    let response = send(&app, Method::GET, "/api/unknown", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
