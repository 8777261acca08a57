//! Line reassembly over an async byte stream.
//!
//! [`LineReader`] keeps reading until the data it has ends on a line feed,
//! then hands back every complete line at once. A line split across several
//! reads (`"PRIVMSG #a :hi\r"` then `"\n"`) comes back as one line. The
//! buffer cap applies to the unterminated tail only.

use std::io;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{self, extract_command_hint, ProtocolError};

/// Bytes requested from the stream per read.
pub const READ_CHUNK_SIZE: usize = 1024;

/// Default cap on bytes buffered while waiting for a line feed.
pub const DEFAULT_MAX_BUFFERED: usize = 64 * 1024;

/// Reads batches of CRLF (or bare LF) terminated lines from a stream.
pub struct LineReader<S> {
    stream: S,
    buffer: BytesMut,
    max_buffered: usize,
}

impl<S> LineReader<S> {
    /// Create a reader with the default buffer cap.
    pub fn new(stream: S) -> Self {
        Self::with_max_buffered(stream, DEFAULT_MAX_BUFFERED)
    }

    /// Create a reader that gives up once `max_buffered` bytes arrive
    /// without a line feed.
    pub fn with_max_buffered(stream: S, max_buffered: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK_SIZE),
            max_buffered,
        }
    }

    /// Set the buffer cap.
    pub fn set_max_buffered(&mut self, max_buffered: usize) {
        self.max_buffered = max_buffered;
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Consume the reader, returning the stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: AsyncRead + Unpin> LineReader<S> {
    /// Read until the received data ends with a line feed.
    ///
    /// Returns `Ok(None)` when the peer closed the stream before sending
    /// anything, otherwise the decoded lines in arrival order with their
    /// terminators removed.
    ///
    /// Once more than the cap is buffered, the complete lines received so
    /// far are returned and the unterminated tail is kept for the next call.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::Io`] for transport failures, including
    ///   `UnexpectedEof` when the stream closes in the middle of a line.
    /// - [`ProtocolError::MessageTooLong`] when the unterminated tail alone
    ///   grows past the configured cap.
    /// - [`ProtocolError::InvalidUtf8`] when the batch does not decode. The
    ///   bytes are discarded, so the next call starts clean.
    pub async fn read_lines(&mut self) -> error::Result<Option<Vec<String>>> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        // A tail carried over from the last call holds no line feed.
        let mut tail_start = 0;

        let raw = loop {
            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let pending = self.buffer.len();
                self.buffer.clear();
                return Err(ProtocolError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("stream closed with {pending} bytes of an unterminated line"),
                )));
            }

            let before = self.buffer.len();
            self.buffer.extend_from_slice(&chunk[..n]);
            if let Some(pos) = chunk[..n].iter().rposition(|&b| b == b'\n') {
                tail_start = before + pos + 1;
            }
            tracing::trace!(bytes = n, buffered = self.buffer.len(), "read chunk");

            if chunk[n - 1] == b'\n' {
                break self.buffer.split();
            }

            let pending = self.buffer.len() - tail_start;
            if pending > self.max_buffered {
                self.buffer.clear();
                return Err(ProtocolError::MessageTooLong {
                    actual: pending,
                    limit: self.max_buffered,
                });
            }

            if self.buffer.len() > self.max_buffered {
                break self.buffer.split_to(tail_start);
            }
        };

        let text = std::str::from_utf8(&raw).map_err(|e| ProtocolError::InvalidUtf8 {
            raw_line: raw.to_vec(),
            byte_pos: e.valid_up_to(),
            details: e.to_string(),
            command_hint: extract_command_hint(&raw),
        })?;

        Ok(Some(split_lines(text)))
    }
}

/// Split decoded text on line feeds, dropping one `\r` per line and the
/// empty remainder after the final terminator.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
        .collect();

    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    lines
}
