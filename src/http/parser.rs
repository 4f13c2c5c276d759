use thiserror::Error;
use tokio::io::AsyncBufRead;

use crate::http::line::{read_line, LineError};
use crate::http::request::{is_allowed_method, Request};

#[derive(Debug, Error)]
pub enum ParseError {
    /// The start line has no space separating the method from the rest.
    #[error("malformed start line {0:?}")]
    MalformedStartLine(String),

    /// The method token is not on the allow-list.
    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    /// The underlying stream failed, ended, or timed out.
    #[error(transparent)]
    Stream(#[from] LineError),
}

impl ParseError {
    pub fn is_eof(&self) -> bool {
        matches!(self, ParseError::Stream(e) if e.is_eof())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ParseError::Stream(e) if e.is_timeout())
    }
}

/// Reads exactly one request (start line, headers, blank line) from `reader`.
///
/// Header lines are consumed and discarded. On success the reader is left
/// positioned at the first byte after the blank line, so calling this again
/// on the same reader parses the next request.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader).await?;

    let method = parse_request_line(&line)
        .ok_or_else(|| ParseError::MalformedStartLine(line.clone()))?;

    if !is_allowed_method(method) {
        return Err(ParseError::InvalidMethod(method.to_string()));
    }

    let request = Request::new(method);

    loop {
        let line = read_line(reader).await?;
        if line.is_empty() {
            break;
        }
        tracing::trace!(line = %line, "Skipping header line");
    }

    Ok(request)
}

/// Splits `"GET /foo HTTP/1.1"` on the first space and returns the method.
///
/// The remainder (target and version) is not inspected. Returns `None` when
/// the line has no space at all.
fn parse_request_line(line: &str) -> Option<&str> {
    line.split_once(' ').map(|(method, _rest)| method)
}
