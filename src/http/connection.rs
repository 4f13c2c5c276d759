use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, BufReader};
use tokio::time::timeout;

use crate::config::Config;
use crate::http::line::LineError;
use crate::http::parser::{read_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

pub struct Connection<S> {
    stream: BufReader<S>,
    config: Arc<Config>,
    peer: Option<SocketAddr>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Writing(ResponseWriter, bool), // bool = keep reading afterwards?
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        Self {
            stream: BufReader::new(stream),
            config,
            peer: None,
            state: ConnectionState::Reading,
        }
    }

    /// Attaches the remote address used in log lines.
    pub fn with_peer(mut self, peer: SocketAddr) -> Self {
        self.peer = Some(peer);
        self
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await {
                        Ok(req) => {
                            let response = self.handle_good_request(&req);
                            ConnectionState::Writing(ResponseWriter::new(&response), true)
                        }
                        Err(e) => self.handle_read_error(e),
                    };
                }

                ConnectionState::Writing(writer, keep_reading) => {
                    if let Err(e) = writer.write_to_stream(self.stream.get_mut()).await {
                        tracing::warn!(peer = ?self.peer, error = %e, "Failed to write response");
                    }

                    // A dead socket surfaces on the next read
                    self.state = if *keep_reading {
                        ConnectionState::Reading
                    } else {
                        ConnectionState::Closed
                    };
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the next request with the configured read deadline armed.
    ///
    /// An expired deadline is reported as a stream timeout. The parse is
    /// dropped mid-flight, so bytes of an unfinished line are not carried in
    /// the error's `partial`.
    pub async fn read_request(&mut self) -> Result<Request, ParseError> {
        match timeout(self.config.read_timeout(), read_request(&mut self.stream)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(ParseError::Stream(LineError::timed_out())),
        }
    }

    fn handle_good_request(&self, req: &Request) -> Response {
        let response = Response::ok(&self.config.doc_root);
        tracing::info!(
            peer = ?self.peer,
            method = req.method(),
            status = response.status.as_u16(),
            file = ?response.file_path,
            "Handled good request"
        );
        response
    }

    /// Decides what to do after a failed read: close silently, or answer 405
    /// and then close.
    fn handle_read_error(&self, err: ParseError) -> ConnectionState {
        if let ParseError::Stream(e) = &err {
            if e.is_clean_eof() {
                tracing::info!(peer = ?self.peer, "Connection closed by peer");
                return ConnectionState::Closed;
            }
            if e.is_truncated() {
                tracing::warn!(peer = ?self.peer, partial = %e.partial_text(), "Connection closed mid-line");
                return ConnectionState::Closed;
            }
            if e.is_timeout() {
                tracing::info!(peer = ?self.peer, "Connection timed out");
                return ConnectionState::Closed;
            }
        }

        let response = Response::method_not_allowed();
        tracing::info!(
            peer = ?self.peer,
            error = %err,
            status = response.status.as_u16(),
            "Handled bad request"
        );
        ConnectionState::Writing(ResponseWriter::new(&response), false)
    }
}
