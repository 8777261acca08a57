//! The single IRC connection.
//!
//! [`Client`] owns one stream for the life of a session: reads go through a
//! [`LineReader`], writes go straight to the stream with `write_all` so a
//! short write is never mistaken for a complete one.

use crate::error::{BotError, BotResult};
use slircbot_proto::{Command, LineReader};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

/// Anything the client can talk IRC over.
pub trait Stream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> Stream for T {}

/// Type-erased stream, so TCP and in-memory test pipes share one client type.
pub type BoxedStream = Box<dyn Stream>;

/// Identity values last sent with NICK and USER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub nickname: Option<String>,
    pub username: Option<String>,
    pub mode: Option<u32>,
    pub fullname: Option<String>,
}

/// One connection to an IRC server.
pub struct Client {
    io: LineReader<BoxedStream>,
    identity: Identity,
}

impl Client {
    /// Open a TCP connection, giving up after `timeout`.
    pub async fn connect(address: &str, port: u16, timeout: Duration) -> BotResult<Self> {
        let target = format!("{address}:{port}");

        let stream = match tokio::time::timeout(timeout, TcpStream::connect((address, port))).await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(BotError::Connect {
                    address: target,
                    source,
                });
            }
            Err(_) => {
                return Err(BotError::Connect {
                    address: target,
                    source: io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("timed out after {}s", timeout.as_secs()),
                    ),
                });
            }
        };

        stream.set_nodelay(true)?;
        info!(address = %target, "Connected");
        Ok(Self::from_stream(stream))
    }

    /// Wrap an already connected stream.
    pub fn from_stream<S: Stream + 'static>(stream: S) -> Self {
        Self {
            io: LineReader::new(Box::new(stream)),
            identity: Identity::default(),
        }
    }

    /// Cap on bytes buffered while waiting for a line feed.
    pub fn set_max_line_buffer(&mut self, max: usize) {
        self.io.set_max_buffered(max);
    }

    /// Identity recorded by [`Client::nick`] and [`Client::user`].
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Read one batch of lines. `None` means the server closed the connection.
    pub async fn read_lines(&mut self) -> BotResult<Option<Vec<String>>> {
        Ok(self.io.read_lines().await?)
    }

    /// Write a pre-formatted line (terminator included) in full.
    pub async fn send(&mut self, text: &str) -> BotResult<()> {
        debug!(line = %text.trim_end(), "Sending");
        let stream = self.io.get_mut();
        stream.write_all(text.as_bytes()).await?;
        stream.flush().await?;
        Ok(())
    }

    /// Serialize and send a command.
    pub async fn send_command(&mut self, command: &Command) -> BotResult<()> {
        self.send(&command.to_line()).await
    }

    /// Answer a PING with the same parameter.
    pub async fn pong(&mut self, param: &str) -> BotResult<()> {
        self.send_command(&Command::Pong(param.to_string())).await
    }

    pub async fn privmsg(&mut self, target: &str, text: &str) -> BotResult<()> {
        self.send_command(&Command::Privmsg(target.to_string(), text.to_string()))
            .await
    }

    /// Change nickname and remember it.
    pub async fn nick(&mut self, nickname: &str) -> BotResult<()> {
        self.identity.nickname = Some(nickname.to_string());
        self.send_command(&Command::Nick(nickname.to_string())).await
    }

    /// Identify to the server and remember the values.
    pub async fn user(&mut self, username: &str, mode: u32, fullname: &str) -> BotResult<()> {
        self.identity.username = Some(username.to_string());
        self.identity.mode = Some(mode);
        self.identity.fullname = Some(fullname.to_string());
        self.send_command(&Command::User(
            username.to_string(),
            mode,
            fullname.to_string(),
        ))
        .await
    }

    pub async fn join(&mut self, channel: &str) -> BotResult<()> {
        self.send_command(&Command::Join(channel.to_string())).await
    }

    pub async fn quit(&mut self, reason: Option<&str>) -> BotResult<()> {
        self.send_command(&Command::Quit(reason.map(str::to_string)))
            .await
    }
}
