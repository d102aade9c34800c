use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::http::handler::Handler;
use crate::http::parser::{self, parse_request, READ_WINDOW};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// One accepted client: a single read, at most one response, then close.
pub struct Connection<S> {
    stream: S,
    handler: Arc<Handler>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<Handler>) -> Self {
        Self { stream, handler }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        if let Some(request) = self.read_request().await? {
            let response = self.handler.respond(&request).await;
            ResponseWriter::new(&response)
                .write_to_stream(&mut self.stream)
                .await?;
        }

        if let Err(e) = self.stream.shutdown().await {
            debug!("Shutdown after response failed: {}", e);
        }
        Ok(())
    }

    /// Reads once, up to [`READ_WINDOW`] bytes.
    ///
    /// `None` means there is nothing to answer and the connection is closed
    /// without writing anything: the peer sent fewer than two tokens, sent
    /// bytes that are not UTF-8, or did not send within the read deadline.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut buf = [0u8; READ_WINDOW];
        let read = self.stream.read(&mut buf);

        let n = match self.handler.site().read_timeout {
            Some(limit) => match tokio::time::timeout(limit, read).await {
                Ok(res) => res?,
                Err(_) => {
                    warn!("No request within {:?}, closing", limit);
                    return Ok(None);
                }
            },
            None => read.await?,
        };

        let raw = &buf[..n];
        if self.handler.site().debug {
            debug!("Got a request of: {:?}", parser::tokens(raw));
        }

        match parse_request(raw) {
            Ok(request) => Ok(Some(request)),
            Err(e) => {
                // Dropped on purpose: no status line for a request we cannot read
                debug!("Dropping unparseable request ({} bytes): {:?}", n, e);
                Ok(None)
            }
        }
    }
}
