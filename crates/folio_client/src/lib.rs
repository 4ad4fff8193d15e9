//! # Folio Client
//!
//! Client side of the Folio to-do list.
//!
//! This crate provides:
//! - `TodoTransport`, the request/response abstraction over the to-do API
//! - `HttpTransport` (reqwest) and `MockTransport` (in memory)
//! - `TaskListView`, the view model that renders the server's collection and
//!   turns gestures (add, toggle, delete) into store operations
//! - Text and JSON rendering of the list area
//!
//! ## Consistency model
//!
//! The server owns the collection. The view never edits its snapshot: each
//! gesture sends one request, waits for it, and on success re-fetches the
//! whole list. Failures surface as an alert (mutations) or as an error
//! message in place of the list (fetches).
//!
//! ```rust,ignore
//! use folio_client::{ClientConfig, HttpTransport, TaskListView};
//!
//! let transport = HttpTransport::new(ClientConfig::from_env())?;
//! let mut view = TaskListView::new(transport);
//! view.refresh().await;
//! view.set_input("Write the README");
//! view.add(&mut prompt).await;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod http;
pub mod render;
mod transport;
mod view;

pub use config::{ClientConfig, DEFAULT_SERVER_URL, SERVER_URL_VAR};
pub use error::{ClientError, ClientResult};
pub use http::HttpTransport;
pub use transport::{MockRequest, MockTransport, TodoTransport};
pub use view::{GestureOutcome, ListState, TaskListView, UserPrompt};
