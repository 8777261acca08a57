//! Error types for the protocol library.
//!
//! Parsing itself never fails; these errors come from reading and decoding
//! the byte stream.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Extract the IRC command name from raw bytes (for error reporting).
///
/// Works without validating UTF-8, so the command of a line that failed to
/// decode can still be named in logs. The command is the first
/// space-delimited token after an optional `:prefix`.
///
/// ```ignore
/// assert_eq!(extract_command_hint(b"PRIVMSG #test hi"), Some("PRIVMSG".to_string()));
/// assert_eq!(extract_command_hint(b":server 001 bot :hi"), Some("001".to_string()));
/// ```
pub(crate) fn extract_command_hint(raw_line: &[u8]) -> Option<String> {
    let mut pos = 0;

    // Skip prefix: :server or :nick!user@host
    if raw_line.first() == Some(&b':') {
        while pos < raw_line.len() && raw_line[pos] != b' ' {
            pos += 1;
        }
        if pos < raw_line.len() {
            pos += 1;
        }
    }

    let cmd_start = pos;
    while pos < raw_line.len() && raw_line[pos].is_ascii_alphanumeric() {
        pos += 1;
    }

    if pos > cmd_start {
        // All alphanumeric ASCII, so this cannot fail.
        String::from_utf8(raw_line[cmd_start..pos].to_vec()).ok()
    } else {
        None
    }
}

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The received bytes were not valid UTF-8.
    ///
    /// Keeps the raw bytes and a command hint so callers can log the
    /// offending batch and keep going.
    #[error("invalid UTF-8 in input at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// The raw bytes that failed to decode.
        raw_line: Vec<u8>,
        /// Byte position where UTF-8 validation failed.
        byte_pos: usize,
        /// Detailed error message from the UTF-8 decoder.
        details: String,
        /// Command name extracted from the raw bytes, if any.
        command_hint: Option<String>,
    },

    /// More bytes were buffered than allowed without a line terminator.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    MessageTooLong {
        /// Bytes buffered so far.
        actual: usize,
        /// Maximum allowed.
        limit: usize,
    },
}

impl ProtocolError {
    /// Whether the session can keep reading after this error.
    ///
    /// Only decode failures are recoverable: the offending bytes have already
    /// been consumed from the buffer.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ProtocolError::InvalidUtf8 { .. })
    }
}
