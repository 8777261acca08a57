//! Handler registrations.
//!
//! Bang-commands are kept in registration order and looked up by name with a
//! full scan. Listeners see every PRIVMSG. Both lists are fixed once the
//! [`Handlers`] value is handed to the bot.

use super::Bot;
use slircbot_proto::Message;
use std::fmt;

/// What a handler returns: an optional reply, or a failure whose text is
/// sent back instead.
pub type HandlerResult = anyhow::Result<Option<String>>;

/// Trait implemented by command and listener handlers.
///
/// Any `Fn(&Bot, &Message) -> HandlerResult` is a handler; implement the
/// trait directly for handlers that carry their own state.
pub trait Handler: Send + Sync {
    fn call(&self, bot: &Bot, msg: &Message) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&Bot, &Message) -> HandlerResult + Send + Sync,
{
    fn call(&self, bot: &Bot, msg: &Message) -> HandlerResult {
        self(bot, msg)
    }
}

/// Which handler produced a result, for logs and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind<'a> {
    /// Bang-command with this registered name.
    Command(&'a str),
    /// Listener at this registration index.
    Listener(usize),
}

impl fmt::Display for HandlerKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(name) => write!(f, "command '{name}'"),
            Self::Listener(index) => write!(f, "listener #{index}"),
        }
    }
}

struct Registration {
    name: String,
    handler: Box<dyn Handler>,
}

/// Registered bang-commands and listeners.
#[derive(Default)]
pub struct Handlers {
    commands: Vec<Registration>,
    listeners: Vec<Box<dyn Handler>>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bang-command closure or fn.
    pub fn command<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Bot, &Message) -> HandlerResult + Send + Sync + 'static,
    {
        self.command_handler(name, handler)
    }

    /// Register a bang-command implemented as a [`Handler`] type.
    pub fn command_handler<H: Handler + 'static>(mut self, name: impl Into<String>, handler: H) -> Self {
        self.commands.push(Registration {
            name: name.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Register a listener closure or fn.
    pub fn listener<F>(self, handler: F) -> Self
    where
        F: Fn(&Bot, &Message) -> HandlerResult + Send + Sync + 'static,
    {
        self.listener_handler(handler)
    }

    /// Register a listener implemented as a [`Handler`] type.
    pub fn listener_handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.listeners.push(Box::new(handler));
        self
    }

    /// Names of the registered bang-commands, in registration order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|r| r.name.as_str())
    }

    /// First registered command called `word`.
    ///
    /// Every registration is checked; a non-matching entry never ends the
    /// search early.
    pub fn find_command(&self, word: &str) -> Option<(&str, &dyn Handler)> {
        self.commands
            .iter()
            .find(|r| r.name == word)
            .map(|r| (r.name.as_str(), r.handler.as_ref()))
    }

    pub(super) fn listener_at(&self, index: usize) -> Option<&dyn Handler> {
        self.listeners.get(index).map(Box::as_ref)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.listeners.is_empty()
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("commands", &self.command_names().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
