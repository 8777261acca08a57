//! # slircbot-proto
//!
//! Wire-level building blocks for the slircbot IRC bot.
//!
//! ## Features
//!
//! - Lenient single-line message parsing into optional prefix, nickname,
//!   command, middle, trailing and body fields
//! - Outbound command templates (PONG, PRIVMSG, NICK, USER, JOIN, QUIT)
//! - Optional Tokio line reader that reassembles lines from partial reads
//!
//! ## Quick Start
//!
//! ```rust
//! use slircbot_proto::Message;
//!
//! let msg = Message::parse(":nick!user@host PRIVMSG #rust :hello world");
//! assert_eq!(msg.nickname(), Some("nick"));
//! assert_eq!(msg.command(), Some("PRIVMSG"));
//! assert_eq!(msg.middle(), Some("#rust"));
//! assert_eq!(msg.body(), Some("hello world"));
//! ```
//!
//! ```rust
//! use slircbot_proto::Command;
//!
//! let line = Command::Privmsg("#rust".into(), "hi there".into()).to_line();
//! assert_eq!(line, "PRIVMSG #rust :hi there\r\n");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;

pub use self::chan::ChannelExt;
pub use self::command::Command;
pub use self::error::{ProtocolError, Result};
#[cfg(feature = "tokio")]
pub use self::line::{LineReader, DEFAULT_MAX_BUFFERED, READ_CHUNK_SIZE};
pub use self::message::Message;
