//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to frame requests off a byte stream and answer them
//! with a status line.
//!
//! # Architecture
//!
//! - **`line`**: reads one CRLF-terminated line from a buffered stream
//! - **`parser`**: reads one request (start line, headers, blank line) and validates the method
//! - **`request`**: the parsed request
//! - **`response`**: status codes and the response value
//! - **`writer`**: serializes and writes the status line to the client
//! - **`connection`**: the per-connection request-response state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read deadline armed, parse one request
//!        └──────┬──────┘
//!               │ GET            → Writing(200, keep reading)
//!               │ bad request    → Writing(405, close)
//!               │ EOF / timeout  → Closed
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send status line
//!        └──────┬───────────┘
//!               ├─ 200 → Reading (same connection)
//!               └─ 405 → Closed
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lineserve::config::Config;
//! use lineserve::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Arc::new(Config::default());
//!     let listener = TcpListener::bind("127.0.0.1:8090").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let cfg = Arc::clone(&cfg);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, cfg);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod line;
pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
