//! HTTP protocol implementation.
//!
//! This module implements the one-request-per-connection subset of HTTP/1.1
//! spoken by the static file server: a single request line is read and parsed,
//! exactly one fully buffered response is written, and the connection closes.
//! Request headers, if the client sends any, are read into the buffer but
//! never parsed or consulted.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler driving the request-response exchange
//! - **`parser`**: Parses the request line into method, path, and version
//! - **`request`**: HTTP request-line representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection Lifecycle
//!
//! Each client connection goes through a single linear exchange:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line (bounded, with deadline)
//!        └──────┬──────┘
//!               │ Line received
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Parse, route, resolve file, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (always; no keep-alive)
//! ```
//!
//! A malformed request line short-circuits the exchange: the connection is
//! closed without writing any bytes.
//!
//! # Example
//!
//! ```ignore
//! use staticd::files::StaticHandler;
//! use staticd::http::connection::Connection;
//! use std::time::Duration;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let handler = StaticHandler::new("public")?;
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let handler = handler.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, handler, Duration::from_secs(10));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
