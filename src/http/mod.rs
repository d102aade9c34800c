//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to serve static files: one read per connection, the
//! method and target taken from it, one response written back.
//!
//! # Architecture
//!
//! - **`connection`**: Reads the request, drives the handler, writes the response
//! - **`parser`**: Extracts method and target from the raw bytes
//! - **`request`**: Request tokens and the set of known methods
//! - **`route`**: The decision tree mapping (method, target) to an action
//! - **`handler`**: Carries out a decision, reading files from disk
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │    Read     │ ← one read, at most 1024 bytes
//!        └──────┬──────┘
//!               │ fewer than 2 tokens → close, nothing written
//!               ▼
//!        ┌──────────────────┐
//!        │    Classify      │ ← 400 / 405 / 404 / 301 / serve
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Write         │ ← exactly one response (200 or 500 when serving)
//!        └──────┬───────────┘
//!               ▼
//!             Close
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wwwserve::config::ContentConfig;
//! use wwwserve::http::{connection::Connection, handler::Handler};
//! use wwwserve::site::Site;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let handler = Arc::new(Handler::new(Site::from_config(&ContentConfig::default())?));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         Connection::new(socket, Arc::clone(&handler)).run().await?;
//!     }
//! }
//! ```

pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod route;
pub mod writer;
