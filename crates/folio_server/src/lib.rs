//! # Folio Server
//!
//! HTTP to-do server for the Folio portfolio site.
//!
//! This crate provides:
//! - The in-memory task store (seeded at startup, lost on restart)
//! - Request handlers for list / create / update / delete
//! - The axum router (`/api/todos`, `/api/status`, `/api/greet`)
//! - Server runtime with graceful shutdown
//!
//! # Architecture
//!
//! One `TaskStore` exists per process. It lives behind a mutex in the
//! `HandlerContext`, which the router reaches through an `Arc`; each request
//! holds the lock for the whole store operation, so requests are applied one
//! at a time and never interleave.
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/todos` | 200 `{status, count, data}` |
//! | POST | `/api/todos` | 201 `{status, data}` |
//! | PATCH | `/api/todos/{id}` | 200 `{status, data}` |
//! | DELETE | `/api/todos/{id}` | 204 |
//!
//! Failures carry `{status: "error", message}` with 400 or 404.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handler;
mod routes;
mod server;
mod store;

pub use config::{ServerConfig, DEFAULT_PORT, HOST_VAR, PORT_VAR};
pub use error::{ServerError, ServerResult};
pub use handler::{HandlerContext, RequestHandler};
pub use routes::router;
pub use server::TodoServer;
pub use store::{default_seed, TaskStore};
