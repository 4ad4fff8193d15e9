//! HTTP-level tests for the to-do API, driven through the router.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use folio_protocol::Task;
use folio_server::{ServerConfig, TodoServer};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Seed `[{1,"A",false},{2,"B",true}]`, next id 3.
fn server() -> TodoServer {
    let config = ServerConfig::default()
        .with_seed(vec![Task::new(1, "A"), Task::new(2, "B").with_completed(true)]);
    TodoServer::new(config).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn list_ids(app: &Router) -> Vec<u64> {
    let (status, body) = send(app, Method::GET, "/api/todos", None).await;
    assert_eq!(status, StatusCode::OK);
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_returns_envelope() {
    let app = server().router();
    let (status, body) = send(&app, Method::GET, "/api/todos", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "count": 2,
            "data": [
                {"id": 1, "text": "A", "completed": false},
                {"id": 2, "text": "B", "completed": true}
            ]
        })
    );
}

#[tokio::test]
async fn create_assigns_next_id() {
    let app = server().router();
    let (status, body) = send(&app, Method::POST, "/api/todos", Some(json!({"text": "C"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"status": "success", "data": {"id": 3, "text": "C", "completed": false}})
    );
    assert_eq!(list_ids(&app).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn patch_sets_completed() {
    let app = server().router();
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/todos/1",
        Some(json!({"completed": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({"id": 1, "text": "A", "completed": true}));

    let (_, list) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(list["data"][1], json!({"id": 2, "text": "B", "completed": true}));
}

#[tokio::test]
async fn delete_returns_no_content() {
    let app = server().router();
    send(&app, Method::POST, "/api/todos", Some(json!({"text": "C"}))).await;

    let (status, body) = send(&app, Method::DELETE, "/api/todos/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    assert_eq!(list_ids(&app).await, vec![1, 3]);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let app = server().router();
    let (status, body) = send(&app, Method::DELETE, "/api/todos/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert!(body["message"].is_string());
    assert_eq!(list_ids(&app).await, vec![1, 2]);
}

#[tokio::test]
async fn create_with_empty_or_missing_text_is_400() {
    let app = server().router();

    for body in [Some(json!({"text": ""})), Some(json!({})), None] {
        let (status, response) = send(&app, Method::POST, "/api/todos", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["status"], "error");
    }
    assert_eq!(list_ids(&app).await, vec![1, 2]);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = server().router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/todos")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list_ids(&app).await, vec![1, 2]);
}

#[tokio::test]
async fn patch_errors() {
    let app = server().router();

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/todos/99",
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/todos/1",
        Some(json!({"completed": "true"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown id is reported before the missing body.
    let (status, _) = send(&app, Method::PATCH, "/api/todos/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/todos/abc",
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/api/todos", None).await;
    assert_eq!(list["data"][0]["completed"], false);
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() {
    let app = server().router();
    let (status, body) = send(&app, Method::GET, "/api/nothing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn wrong_method_uses_error_envelope() {
    let app = server().router();

    let (status, body) = send(&app, Method::GET, "/api/todos/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("GET"));

    let (status, body) = send(&app, Method::PUT, "/api/todos", Some(json!({"text": "X"}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], "error");
    assert_eq!(list_ids(&app).await, vec![1, 2]);
}

#[tokio::test]
async fn status_and_greet() {
    let app = server().router();

    let (status, body) = send(&app, Method::GET, "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["server_time"].is_string());

    let (_, body) = send(&app, Method::GET, "/api/greet?name=Ada", None).await;
    assert_eq!(body["received_name"], "Ada");

    let (_, body) = send(&app, Method::GET, "/api/greet", None).await;
    assert_eq!(body["received_name"], "none");
}

#[tokio::test]
async fn cors_preflight_allows_patch() {
    let app = server().router();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/todos/1")
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
