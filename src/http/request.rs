/// The only method this server accepts.
pub const ALLOWED_METHOD: &str = "GET";

/// Represents a parsed HTTP request from a client.
///
/// Only the method survives parsing; the target, version and headers are
/// read off the wire and dropped. A `Request` can only be obtained from
/// [`read_request`](crate::http::parser::read_request), so its method has
/// always passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
}

impl Request {
    pub(crate) fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    /// The HTTP method, currently always `"GET"`.
    pub fn method(&self) -> &str {
        &self.method
    }
}

/// Allow-list check: exact, case-sensitive match against [`ALLOWED_METHOD`].
///
/// # Example
///
/// ```
/// # use lineserve::http::request::is_allowed_method;
/// assert!(is_allowed_method("GET"));
/// assert!(!is_allowed_method("get"));
/// assert!(!is_allowed_method("POST"));
/// ```
pub fn is_allowed_method(method: &str) -> bool {
    method == ALLOWED_METHOD
}
