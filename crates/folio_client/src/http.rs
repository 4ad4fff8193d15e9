//! HTTP transport implementation.
//!
//! Talks JSON to the to-do server with `reqwest`. Success bodies are decoded
//! from the response envelopes; error statuses are mapped onto
//! [`ClientError`] using the server's `{status, message}` envelope when one
//! is present.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport::TodoTransport;
use async_trait::async_trait;
use folio_protocol::{
    routes, CreateTaskRequest, ErrorResponse, GreetResponse, ServerStatusResponse, Task, TaskId,
    TaskListResponse, TaskResponse, UpdateTaskRequest,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP-based to-do transport.
pub struct HttpTransport {
    /// Base URL of the server (e.g., "http://127.0.0.1:3001").
    base_url: String,
    /// HTTP client.
    client: Client,
}

impl HttpTransport {
    /// Creates a new HTTP transport.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::unreachable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Calls `GET /api/status`.
    pub async fn server_status(&self) -> ClientResult<ServerStatusResponse> {
        let response = self.send(self.client.get(self.url(routes::STATUS))).await?;
        decode(response).await
    }

    /// Calls `GET /api/greet`, with `?name=` when a name is given.
    pub async fn greet(&self, name: Option<&str>) -> ClientResult<GreetResponse> {
        let mut request = self.client.get(self.url(routes::GREET));
        if let Some(name) = name {
            request = request.query(&[("name", name)]);
        }
        let response = self.send(request).await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!("request failed: {e}");
            ClientError::unreachable(e.to_string())
        })?;

        let status = response.status();
        debug!(%status, url = %response.url(), "response received");
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }
}

#[async_trait]
impl TodoTransport for HttpTransport {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let response = self.send(self.client.get(self.url(routes::TODOS))).await?;
        let body: TaskListResponse = decode(response).await?;
        Ok(body.data)
    }

    async fn create(&self, text: &str) -> ClientResult<Task> {
        let request = self
            .client
            .post(self.url(routes::TODOS))
            .json(&CreateTaskRequest::new(text));
        let response = self.send(request).await?;
        let body: TaskResponse = decode(response).await?;
        Ok(body.data)
    }

    async fn update(&self, id: TaskId, completed: bool) -> ClientResult<Task> {
        let request = self
            .client
            .patch(self.url(&routes::todo_path(id)))
            .json(&UpdateTaskRequest { completed });
        let response = self.send(request).await?;
        let body: TaskResponse = decode(response).await?;
        Ok(body.data)
    }

    async fn delete(&self, id: TaskId) -> ClientResult<()> {
        let response = self
            .send(self.client.delete(self.url(&routes::todo_path(id))))
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            other => Err(ClientError::unexpected_status(
                other.as_u16(),
                format!("expected 204 No Content, got {other}"),
            )),
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::unreachable(e.to_string()))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::Protocol(format!("failed to decode response: {e}")))
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };

    match status {
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        other => ClientError::unexpected_status(other.as_u16(), message),
    }
}
