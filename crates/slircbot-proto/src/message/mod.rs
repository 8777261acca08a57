//! IRC message type and parsing.

mod parse;
mod serialize;
mod types;

pub use self::parse::ORIGIN_MARKER;
pub use self::types::Message;
