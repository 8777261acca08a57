//! Message parsing implementation.
//!
//! Tokens are split on single spaces without collapsing, so two consecutive
//! spaces produce an empty token. The trailing block therefore comes out
//! byte-identical to the tail of the wire line.

use std::convert::Infallible;
use std::str::FromStr;

use super::types::Message;

/// Sigil that marks the origin prefix and the trailing parameter.
pub const ORIGIN_MARKER: char = ':';

/// Separator between the nickname and the user part of a prefix.
const NICK_SEPARATOR: char = '!';

impl Message {
    /// Parse one line, without its CRLF terminator.
    ///
    /// Never fails. A line with fewer than two tokens yields an empty
    /// message (see [`Message::is_empty`]).
    #[must_use]
    pub fn parse(line: &str) -> Message {
        let Some((head, rest)) = line.split_once(' ') else {
            return Message::default();
        };

        let (prefix, command, params) = if head.starts_with(ORIGIN_MARKER) {
            match rest.split_once(' ') {
                Some((command, params)) => (Some(head), command, Some(params)),
                None => (Some(head), rest, None),
            }
        } else {
            (None, head, Some(rest))
        };

        let nickname = prefix.and_then(nickname_from_prefix);

        let (middle, trailing) = match params {
            Some(params) => match params.split_once(' ') {
                Some((middle, trailing)) => (Some(middle), Some(trailing)),
                None => (Some(params), None),
            },
            None => (None, None),
        };

        let body = trailing.map(strip_trailing_marker);

        Message {
            prefix: prefix.map(str::to_owned),
            nickname: nickname.map(str::to_owned),
            command: Some(command.to_owned()),
            middle: middle.map(str::to_owned),
            trailing: trailing.map(str::to_owned),
            body: body.map(str::to_owned),
        }
    }
}

/// `:nick!user@host` gives `nick`; a server prefix gives nothing.
fn nickname_from_prefix(prefix: &str) -> Option<&str> {
    let mask = prefix.strip_prefix(ORIGIN_MARKER).unwrap_or(prefix);
    mask.split_once(NICK_SEPARATOR).map(|(nick, _)| nick)
}

/// Remove the `:` that introduces a trailing parameter.
///
/// A trailing block that does not start with `:` is already the text.
fn strip_trailing_marker(trailing: &str) -> &str {
    trailing.strip_prefix(ORIGIN_MARKER).unwrap_or(trailing)
}

impl FromStr for Message {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        Ok(Message::parse(s))
    }
}

impl From<&str> for Message {
    fn from(line: &str) -> Self {
        Message::parse(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_privmsg_with_prefix() {
        let msg = Message::parse(":nick!user@host PRIVMSG #chan :hello world");
        assert_eq!(msg.prefix(), Some(":nick!user@host"));
        assert_eq!(msg.nickname(), Some("nick"));
        assert_eq!(msg.command(), Some("PRIVMSG"));
        assert_eq!(msg.middle(), Some("#chan"));
        assert_eq!(msg.trailing(), Some(":hello world"));
        assert_eq!(msg.body(), Some("hello world"));
    }

    #[test]
    fn test_parse_single_token_is_empty() {
        let msg = Message::parse("NOOP");
        assert!(msg.is_empty());
        assert_eq!(msg, Message::default());
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(Message::parse("").is_empty());
    }

    #[test]
    fn test_parse_lone_prefix_is_empty() {
        assert!(Message::parse(":irc.example.net").is_empty());
    }

    #[test]
    fn test_parse_ping() {
        let msg = Message::parse("PING :abc");
        assert_eq!(msg.prefix(), None);
        assert_eq!(msg.nickname(), None);
        assert_eq!(msg.command(), Some("PING"));
        assert_eq!(msg.middle(), Some(":abc"));
        assert_eq!(msg.trailing(), None);
        assert_eq!(msg.body(), None);
    }

    #[test]
    fn test_parse_server_prefix_has_no_nickname() {
        let msg = Message::parse(":irc.example.net 001 bot :Welcome to the network");
        assert_eq!(msg.prefix(), Some(":irc.example.net"));
        assert_eq!(msg.nickname(), None);
        assert_eq!(msg.command(), Some("001"));
        assert!(msg.is_numeric());
        assert_eq!(msg.middle(), Some("bot"));
        assert_eq!(msg.body(), Some("Welcome to the network"));
    }

    #[test]
    fn test_parse_prefix_and_command_only() {
        let msg = Message::parse(":irc.example.net PING");
        assert_eq!(msg.command(), Some("PING"));
        assert_eq!(msg.middle(), None);
        assert_eq!(msg.trailing(), None);
    }

    #[test]
    fn test_parse_trailing_without_colon() {
        let msg = Message::parse(":a!b@c PRIVMSG bot hello");
        assert_eq!(msg.trailing(), Some("hello"));
        assert_eq!(msg.body(), Some("hello"));
    }

    #[test]
    fn test_parse_consecutive_spaces_are_literal() {
        let msg = Message::parse("PRIVMSG  #chan :hi");
        assert_eq!(msg.command(), Some("PRIVMSG"));
        assert_eq!(msg.middle(), Some(""));
        assert_eq!(msg.trailing(), Some("#chan :hi"));

        let msg = Message::parse(":a!b@c PRIVMSG #chan :two  spaces ");
        assert_eq!(msg.body(), Some("two  spaces "));
    }

    #[test]
    fn test_parse_trailing_space_gives_empty_middle() {
        let msg = Message::parse("PING ");
        assert_eq!(msg.command(), Some("PING"));
        assert_eq!(msg.middle(), Some(""));
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_parse_empty_trailing() {
        let msg = Message::parse(":a!b@c PRIVMSG #chan :");
        assert_eq!(msg.trailing(), Some(":"));
        assert_eq!(msg.body(), Some(""));
    }

    #[test]
    fn test_parse_nickname_requires_bang() {
        assert_eq!(Message::parse(":nick@host PRIVMSG #c :x").nickname(), None);
        assert_eq!(Message::parse(":!u@h PRIVMSG #c :x").nickname(), Some(""));
    }

    #[test]
    fn test_from_str() {
        let msg: Message = "JOIN #rust".parse().unwrap();
        assert_eq!(msg.command(), Some("JOIN"));
        assert_eq!(Message::from("JOIN #rust"), msg);
    }
}
