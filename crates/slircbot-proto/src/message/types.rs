//! Owned, immutable IRC message.

/// One parsed wire line.
///
/// Every field is optional and a missing field is `None`, never an empty
/// string: `PING ` has a present-but-empty middle, `NOOP` has nothing at all.
/// Only one middle parameter is recognised; everything after it is the
/// trailing block.
///
/// Fields are derived in order, each one only when the previous is present:
///
/// | field      | source                                                  |
/// |------------|---------------------------------------------------------|
/// | `prefix`   | first token, when it starts with `:`                    |
/// | `nickname` | `prefix` between `:` and the first `!`                  |
/// | `command`  | first token without prefix, second token with one       |
/// | `middle`   | token right after `command`                             |
/// | `trailing` | all remaining tokens, space separated                   |
/// | `body`     | `trailing` without its leading `:`                      |
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Message {
    pub(super) prefix: Option<String>,
    pub(super) nickname: Option<String>,
    pub(super) command: Option<String>,
    pub(super) middle: Option<String>,
    pub(super) trailing: Option<String>,
    pub(super) body: Option<String>,
}

impl Message {
    /// Origin prefix including its leading `:` (e.g. `:nick!user@host`).
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Sender nickname, when the prefix is a `nick!user@host` mask.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Command or numeric (e.g. `PRIVMSG`, `001`).
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The single middle parameter (target of a PRIVMSG, token of a PING).
    #[must_use]
    pub fn middle(&self) -> Option<&str> {
        self.middle.as_deref()
    }

    /// Everything after the middle parameter, as received.
    #[must_use]
    pub fn trailing(&self) -> Option<&str> {
        self.trailing.as_deref()
    }

    /// Message text: the trailing block without its `:` marker.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Whether the line was too short to carry anything (every field absent).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.command.is_none()
    }

    /// Whether the command is a three digit numeric reply.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.command
            .as_deref()
            .is_some_and(|c| c.len() == 3 && c.bytes().all(|b| b.is_ascii_digit()))
    }
}
