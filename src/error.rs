//! Unified error handling for slircbot.
//!
//! Transport and protocol failures end the session and bubble up to `main`.
//! Handler failures never show up here: the dispatch engine turns them into
//! replies (see [`crate::bot::registry::HandlerResult`]).

use slircbot_proto::ProtocolError;
use thiserror::Error;

/// Session-level errors.
#[derive(Debug, Error)]
pub enum BotError {
    /// TCP connect refused, unreachable, or timed out.
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Write failure on an established connection.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Read-side failure from the line reader.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The operation needs a connection and there is none.
    #[error("not connected")]
    NotConnected,
}

impl BotError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "connect_failed",
            Self::Io(_) => "io_error",
            Self::Protocol(ProtocolError::MessageTooLong { .. }) => "message_too_long",
            Self::Protocol(ProtocolError::InvalidUtf8 { .. }) => "invalid_utf8",
            Self::Protocol(_) => "protocol_error",
            Self::NotConnected => "not_connected",
        }
    }
}

/// Result type for session operations.
pub type BotResult<T> = Result<T, BotError>;
