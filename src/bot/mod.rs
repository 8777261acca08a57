//! The dispatch engine.
//!
//! A [`Bot`] owns one [`Client`] and reacts to what the server sends:
//!
//! - `PING` is answered with `PONG` and the same parameter.
//! - `001` (welcome) triggers the channel join.
//! - `PRIVMSG` goes to the first bang-command whose name matches the word
//!   after the trigger, then to every listener. Replies are sent to the
//!   channel the message arrived on, or privately to the sender.
//!
//! Everything runs on one task: a batch is read, each line is parsed and
//! dispatched in order, then the next batch is read.

pub mod observer;
pub mod registry;

use crate::client::{Client, Identity, Stream};
use crate::config::Config;
use crate::error::{BotError, BotResult};
use crate::telemetry::spans;
use observer::{Observer, TracingObserver};
use registry::{Handler, HandlerKind, Handlers};
use slircbot_proto::{ChannelExt, Message};
use tracing::{Instrument, debug, info, warn};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No connection.
    Disconnected,
    /// Connected, NICK/USER not yet sent.
    Connected,
    /// NICK/USER sent, waiting for the welcome numeric.
    Registering,
    /// Welcome received and JOIN sent.
    Joined,
}

/// Outcome of one [`Bot::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A batch was handled; call again.
    Continue,
    /// The server closed the connection.
    EndOfStream,
}

/// An IRC bot session.
pub struct Bot {
    config: Config,
    handlers: Handlers,
    client: Option<Client>,
    state: SessionState,
    observer: Box<dyn Observer>,
}

impl Bot {
    pub fn new(config: Config, handlers: Handlers) -> Self {
        Self {
            config,
            handlers,
            client: None,
            state: SessionState::Disconnected,
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the default [`TracingObserver`].
    #[allow(dead_code)]
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Channel joined after registration.
    #[allow(dead_code)]
    pub fn channel(&self) -> &str {
        &self.config.bot.channel
    }

    /// Character that starts a bang-command.
    pub fn trigger(&self) -> char {
        self.config.bot.trigger
    }

    /// Registered bang-command names, in registration order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.command_names()
    }

    /// Identity recorded by the connection, if there is one.
    pub fn identity(&self) -> Option<&Identity> {
        self.client.as_ref().map(Client::identity)
    }

    /// Nickname last sent to the server, or the configured one.
    pub fn nickname(&self) -> &str {
        self.identity()
            .and_then(|identity| identity.nickname.as_deref())
            .unwrap_or(&self.config.identity.nickname)
    }

    /// Open the TCP connection described by the server config.
    pub async fn connect(&mut self) -> BotResult<()> {
        let server = &self.config.server;
        let mut client =
            Client::connect(&server.address, server.port, server.connect_timeout()).await?;
        client.set_max_line_buffer(server.max_line_buffer);
        self.install(client);
        Ok(())
    }

    /// Use an already connected stream.
    #[allow(dead_code)]
    pub fn attach<S: Stream + 'static>(&mut self, stream: S) {
        let mut client = Client::from_stream(stream);
        client.set_max_line_buffer(self.config.server.max_line_buffer);
        self.install(client);
    }

    fn install(&mut self, client: Client) {
        self.client = Some(client);
        self.set_state(SessionState::Connected);
    }

    /// Send NICK and USER from the identity config.
    pub async fn register(&mut self) -> BotResult<()> {
        let identity = self.config.identity.clone();
        let client = self.client_mut()?;
        client.nick(&identity.nickname).await?;
        client
            .user(identity.username(), identity.mode, identity.fullname())
            .await?;
        if let Some(sent) = self.identity() {
            debug!(
                nick = ?sent.nickname,
                user = ?sent.username,
                mode = ?sent.mode,
                realname = ?sent.fullname,
                "Registration sent"
            );
        }
        self.set_state(SessionState::Registering);
        Ok(())
    }

    /// Say goodbye. The connection stays open until the server drops it.
    pub async fn quit(&mut self, reason: Option<&str>) -> BotResult<()> {
        self.client_mut()?.quit(reason).await
    }

    /// Process batches until the server closes the connection.
    pub async fn run(&mut self) -> BotResult<()> {
        let span = spans::session(&self.config.server.address, self.nickname());
        self.run_until_closed().instrument(span).await
    }

    async fn run_until_closed(&mut self) -> BotResult<()> {
        loop {
            if self.step().await? == Step::EndOfStream {
                return Ok(());
            }
        }
    }

    /// Read one batch of lines and dispatch each of them.
    pub async fn step(&mut self) -> BotResult<Step> {
        let batch = self.client_mut()?.read_lines().await;

        let lines = match batch {
            Ok(Some(lines)) => lines,
            Ok(None) => {
                info!("Server closed the connection");
                self.client = None;
                self.set_state(SessionState::Disconnected);
                return Ok(Step::EndOfStream);
            }
            Err(BotError::Protocol(err)) if err.is_recoverable() => {
                warn!(error = %err, "Dropping undecodable batch");
                return Ok(Step::Continue);
            }
            Err(err) => return Err(err),
        };

        for line in &lines {
            let msg = Message::parse(line);
            self.dispatch(&msg).await?;
        }
        Ok(Step::Continue)
    }

    async fn dispatch(&mut self, msg: &Message) -> BotResult<()> {
        self.observer.on_message(msg);

        let Some(command) = msg.command() else {
            return Ok(());
        };

        self.handle(command, msg)
            .instrument(spans::dispatch(command))
            .await
    }

    async fn handle(&mut self, command: &str, msg: &Message) -> BotResult<()> {
        match command {
            "PING" => match msg.middle() {
                Some(param) => self.client_mut()?.pong(param).await,
                None => {
                    warn!("PING without a parameter");
                    Ok(())
                }
            },
            "001" => {
                let channel = self.config.bot.channel.clone();
                self.client_mut()?.join(&channel).await?;
                self.set_state(SessionState::Joined);
                Ok(())
            }
            "PRIVMSG" => self.dispatch_privmsg(msg).await,
            _ => Ok(()),
        }
    }

    async fn dispatch_privmsg(&mut self, msg: &Message) -> BotResult<()> {
        let target = reply_target(msg);

        if let Some(word) = msg.body().and_then(|body| bang_word(body, self.trigger())) {
            if let Some((name, handler)) = self.handlers.find_command(word) {
                debug!(command = name, "Bang command");
                let reply = self.invoke(HandlerKind::Command(name), handler, msg);
                self.send_reply(target, reply).await?;
            }
        }

        for index in 0..self.handlers.listener_count() {
            let reply = match self.handlers.listener_at(index) {
                Some(handler) => self.invoke(HandlerKind::Listener(index), handler, msg),
                None => None,
            };
            self.send_reply(target, reply).await?;
        }

        Ok(())
    }

    /// Call a handler, turning a failure into its error text.
    fn invoke(&self, kind: HandlerKind<'_>, handler: &dyn Handler, msg: &Message) -> Option<String> {
        match handler.call(self, msg) {
            Ok(reply) => reply,
            Err(err) => {
                self.observer.on_handler_error(kind, msg, &err);
                Some(format!("{err:#}"))
            }
        }
    }

    async fn send_reply(&mut self, target: Option<&str>, reply: Option<String>) -> BotResult<()> {
        let Some(reply) = reply else {
            return Ok(());
        };
        match target {
            Some(target) => self.client_mut()?.privmsg(target, &reply).await,
            None => {
                warn!(reply = %reply, "No reply target, dropping reply");
                Ok(())
            }
        }
    }

    fn client_mut(&mut self) -> BotResult<&mut Client> {
        self.client.as_mut().ok_or(BotError::NotConnected)
    }

    fn set_state(&mut self, next: SessionState) {
        if self.state != next {
            self.observer.on_state_change(self.state, next);
            self.state = next;
        }
    }
}

/// Channel the message was sent to, otherwise the sender.
fn reply_target(msg: &Message) -> Option<&str> {
    match msg.middle() {
        Some(middle) if middle.is_channel_target() => Some(middle),
        _ => msg.nickname(),
    }
}

/// Word after the trigger, up to the next space.
fn bang_word(body: &str, trigger: char) -> Option<&str> {
    let rest = body.strip_prefix(trigger)?;
    Some(rest.split_once(' ').map_or(rest, |(word, _)| word))
}
