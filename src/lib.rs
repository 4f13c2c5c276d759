//! lineserve - minimal single-endpoint HTTP/1.1 listener
//!
//! Reads CRLF-framed requests, accepts only GET, and answers every request
//! with a bare status line.

pub mod config;
pub mod http;
pub mod server;
