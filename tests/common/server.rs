//! Scripted IRC server.
//!
//! Listens on an ephemeral port, accepts the bot, and lets a test exchange
//! raw lines with it.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpListener;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A listening test server.
pub struct TestServer {
    listener: TcpListener,
}

impl TestServer {
    /// Bind to an ephemeral localhost port.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        Ok(Self { listener })
    }

    pub fn port(&self) -> u16 {
        self.listener
            .local_addr()
            .map(|addr| addr.port())
            .unwrap_or_default()
    }

    /// Wait for the bot to connect.
    pub async fn accept(&self) -> anyhow::Result<TestConnection> {
        let (stream, _) = timeout(RECV_TIMEOUT, self.listener.accept()).await??;
        let (read_half, write_half) = stream.into_split();
        Ok(TestConnection {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        })
    }
}

/// The server side of one bot connection.
pub struct TestConnection {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl TestConnection {
    /// Send a raw IRC line, adding CRLF when missing.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with("\r\n") {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line from the bot, without its terminator.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(RECV_TIMEOUT, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("Connection closed by bot");
        }
        anyhow::ensure!(line.ends_with("\r\n"), "Line without CRLF: {line:?}");
        line.truncate(line.len() - 2);
        Ok(line)
    }

    /// Receive one line and check it.
    pub async fn expect(&mut self, expected: &str) -> anyhow::Result<()> {
        let line = self.recv().await?;
        anyhow::ensure!(line == expected, "Expected {expected:?}, got {line:?}");
        Ok(())
    }
}
