//! HTTP routing.

use crate::error::ServerError;
use crate::handler::RequestHandler;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header::CONTENT_TYPE, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Json, Router};
use folio_protocol::{routes, GreetResponse, ServerStatusResponse, TaskListResponse, TaskResponse};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

type Shared = State<Arc<RequestHandler>>;

/// Builds the application router around a handler.
pub fn router(handler: Arc<RequestHandler>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(routes::TODOS, get(list_todos).post(create_todo))
        .route(routes::TODO_BY_ID, patch(update_todo).delete(delete_todo))
        .route(routes::STATUS, get(status))
        .route(routes::GREET, get(greet))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .with_state(handler)
}

async fn list_todos(State(handler): Shared) -> Json<TaskListResponse> {
    Json(handler.list())
}

async fn create_todo(
    State(handler): Shared,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ServerError> {
    let body = accept_body(body);
    let task = handler.create(body.as_ref())?;
    Ok((StatusCode::CREATED, Json(TaskResponse::new(task))))
}

async fn update_todo(
    State(handler): Shared,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TaskResponse>, ServerError> {
    let body = accept_body(body);
    let task = handler.update(&id, body.as_ref())?;
    Ok(Json(TaskResponse::new(task)))
}

async fn delete_todo(
    State(handler): Shared,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    handler.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn status(State(handler): Shared) -> Json<ServerStatusResponse> {
    Json(handler.status())
}

#[derive(Debug, Deserialize)]
struct GreetQuery {
    name: Option<String>,
}

async fn greet(State(handler): Shared, Query(query): Query<GreetQuery>) -> Json<GreetResponse> {
    Json(handler.greet(query.name.as_deref()))
}

async fn fallback(uri: Uri) -> impl IntoResponse {
    ServerError::NotFound(format!("no route for {}", uri.path()))
}

/// A body that is missing or not JSON counts as an empty one.
async fn method_not_allowed(method: Method, uri: Uri) -> impl IntoResponse {
    ServerError::MethodNotAllowed(format!("{method} is not allowed on {}", uri.path()))
}

fn accept_body(body: Result<Json<Value>, JsonRejection>) -> Option<Value> {
    match body {
        Ok(Json(value)) => Some(value),
        Err(rejection) => {
            debug!("ignoring request body: {rejection}");
            None
        }
    }
}
