use std::path::{Path, PathBuf};

/// File the 200 response points at, relative to the document root.
pub const DEFAULT_FILE: &str = "hello-world.txt";

/// HTTP status codes this server can emit.
///
/// - `Ok` (200): a valid GET request was read
/// - `MethodNotAllowed` (405): the request was malformed or not a GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use lineserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }

    /// Looks up a numeric code. Codes outside the table return `None`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lineserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::from_u16(405), Some(StatusCode::MethodNotAllowed));
    /// assert_eq!(StatusCode::from_u16(404), None);
    /// ```
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            405 => Some(StatusCode::MethodNotAllowed),
            _ => None,
        }
    }
}

/// A response ready to be written back to the client.
///
/// Only the status line goes on the wire. `file_path` records the file a
/// 200 response resolves to; its contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub file_path: Option<PathBuf>,
}

impl Response {
    /// A 200 OK response resolving [`DEFAULT_FILE`] under `doc_root`.
    pub fn ok(doc_root: impl AsRef<Path>) -> Self {
        Self {
            status: StatusCode::Ok,
            file_path: Some(doc_root.as_ref().join(DEFAULT_FILE)),
        }
    }

    /// A 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::MethodNotAllowed,
            file_path: None,
        }
    }
}
