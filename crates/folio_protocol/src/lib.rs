//! # Folio Protocol
//!
//! Wire types for the Folio to-do API.
//!
//! This crate provides:
//! - `Task`, the only entity exchanged between client and server
//! - Request bodies for create and update
//! - Response envelopes (`{status, data}` / `{status, message}`)
//! - Route paths shared by the router and the HTTP transport
//!
//! This is a pure protocol crate with no I/O operations.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod messages;
pub mod routes;
mod task;

pub use messages::{
    CreateTaskRequest, ErrorResponse, GreetResponse, ResponseStatus, ServerStatusResponse,
    TaskListResponse, TaskResponse, UpdateTaskRequest,
};
pub use task::{Task, TaskId};
