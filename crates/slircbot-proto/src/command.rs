//! Outbound IRC commands.
//!
//! Only the handful of commands a bot sends are modelled. [`Display`] writes
//! the line without terminator, [`Command::to_line`] appends CRLF.
//!
//! Parameters are sanitised before they are written: anything from the first
//! CR or LF onwards is dropped, so a reply can never smuggle in a second
//! protocol line.

use std::fmt::{self, Display, Formatter};

/// Protocol line terminator.
pub const CRLF: &str = "\r\n";

/// A command the bot sends to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PONG <param>`, the param echoed verbatim from the PING.
    Pong(String),
    /// `PRIVMSG <target> :<text>`
    Privmsg(String, String),
    /// `NICK <nickname>`
    Nick(String),
    /// `USER <username> <mode> * :<realname>`
    User(String, u32, String),
    /// `JOIN <channel>`
    Join(String),
    /// `QUIT [:<reason>]`
    Quit(Option<String>),
}

impl Command {
    /// Serialize with the CRLF terminator, ready for the wire.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{self}{CRLF}")
    }

    /// Command name as it appears on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Pong(_) => "PONG",
            Command::Privmsg(..) => "PRIVMSG",
            Command::Nick(_) => "NICK",
            Command::User(..) => "USER",
            Command::Join(_) => "JOIN",
            Command::Quit(_) => "QUIT",
        }
    }
}

/// Truncate at the first line ending.
#[must_use]
pub fn sanitize(param: &str) -> &str {
    match param.find(&['\r', '\n'][..]) {
        Some(pos) => &param[..pos],
        None => param,
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pong(param) => write!(f, "PONG {}", sanitize(param)),
            Command::Privmsg(target, text) => {
                write!(f, "PRIVMSG {} :{}", sanitize(target), sanitize(text))
            }
            Command::Nick(nick) => write!(f, "NICK {}", sanitize(nick)),
            Command::User(user, mode, realname) => {
                write!(f, "USER {} {} * :{}", sanitize(user), mode, sanitize(realname))
            }
            Command::Join(channel) => write!(f, "JOIN {}", sanitize(channel)),
            Command::Quit(Some(reason)) => write!(f, "QUIT :{}", sanitize(reason)),
            Command::Quit(None) => f.write_str("QUIT"),
        }
    }
}
