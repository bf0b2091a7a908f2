use std::time::Duration;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::files::StaticHandler;
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::request::Method;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Upper bound on buffered bytes while waiting for the line terminator.
const MAX_REQUEST_LINE: usize = 8 * 1024;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    handler: StaticHandler,
    read_timeout: Duration,
}

impl Connection {
    pub fn new(stream: TcpStream, handler: StaticHandler, read_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            handler,
            read_timeout,
        }
    }

    /// Drives one request-response exchange, then the connection closes.
    ///
    /// Malformed input (no line terminator before EOF, too few tokens, an
    /// overlong line, or deadline expiry) closes the connection without
    /// writing any bytes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let line = match timeout(self.read_timeout, self.read_request_line()).await {
            Ok(result) => result?,
            Err(_) => {
                debug!("Timed out waiting for request line");
                return Ok(());
            }
        };

        let Some(line) = line else {
            return Ok(());
        };

        info!("Request: {}", line.trim_end());

        let response = match parse_request_line(&line) {
            Ok(req) if req.method == Method::GET => self.handler.serve(&req.path).await,
            Ok(_) | Err(ParseError::UnsupportedMethod) => Response::method_not_allowed(),
            Err(ParseError::MalformedRequestLine) => {
                debug!("Malformed request line, closing");
                return Ok(());
            }
        };

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// Reads up to and including the first `\n` on the stream.
    ///
    /// Returns `None` when the client closes before sending a line terminator,
    /// or when the line exceeds [`MAX_REQUEST_LINE`]; both are silent-close
    /// cases for the caller.
    async fn read_request_line(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            // Try to find a complete line in whatever we already have
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let line = self.buffer.split_to(pos + 1);
                return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
            }

            if self.buffer.len() > MAX_REQUEST_LINE {
                debug!("Request line exceeds {} bytes, closing", MAX_REQUEST_LINE);
                return Ok(None);
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(None);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
