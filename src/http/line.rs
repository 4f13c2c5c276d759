//! CRLF line framing over a buffered byte stream.

use std::borrow::Cow;
use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// A read that stopped before a `\r\n` terminator was found.
///
/// `partial` holds every byte accumulated before the failure, exactly as
/// received, so callers can tell a connection that closed between lines
/// (empty) from one that closed mid-line (non-empty).
#[derive(Debug, Error)]
#[error("line read failed after {} bytes: {source}", .partial.len())]
pub struct LineError {
    pub partial: Vec<u8>,
    #[source]
    pub source: io::Error,
}

impl LineError {
    pub fn new(partial: impl Into<Vec<u8>>, source: io::Error) -> Self {
        Self {
            partial: partial.into(),
            source,
        }
    }

    /// The stream ended before a terminator.
    pub fn eof(partial: impl Into<Vec<u8>>) -> Self {
        Self::new(
            partial,
            io::Error::new(io::ErrorKind::UnexpectedEof, "end of stream"),
        )
    }

    /// A read deadline expired before a terminator.
    pub fn timed_out() -> Self {
        Self::new(
            Vec::new(),
            io::Error::new(io::ErrorKind::TimedOut, "read deadline elapsed"),
        )
    }

    /// The accumulated bytes as text, with invalid UTF-8 replaced.
    pub fn partial_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.partial)
    }

    pub fn is_eof(&self) -> bool {
        self.source.kind() == io::ErrorKind::UnexpectedEof
    }

    /// End of stream with nothing accumulated: the peer closed between lines.
    pub fn is_clean_eof(&self) -> bool {
        self.is_eof() && self.partial.is_empty()
    }

    /// End of stream in the middle of a line.
    pub fn is_truncated(&self) -> bool {
        self.is_eof() && !self.partial.is_empty()
    }

    pub fn is_timeout(&self) -> bool {
        self.source.kind() == io::ErrorKind::TimedOut
    }
}

/// Reads one line terminated by `\r\n` and returns it without the terminator.
///
/// A bare `\n` is ordinary content. There is no length limit; bytes are
/// accumulated until the terminator or an error. Invalid UTF-8 in a complete
/// line is replaced with U+FFFD; [`LineError::partial`] keeps the raw bytes.
pub async fn read_line<R>(reader: &mut R) -> Result<String, LineError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();

    loop {
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => return Err(LineError::eof(buf)),
            Ok(_) => {
                if buf.ends_with(b"\r\n") {
                    buf.truncate(buf.len() - 2);
                    return Ok(String::from_utf8_lossy(&buf).into_owned());
                }
            }
            Err(e) => return Err(LineError::new(buf, e)),
        }
    }
}
