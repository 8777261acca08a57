//! Spawned slircbot process.

use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

pub const NICK: &str = "testbot";
pub const CHANNEL: &str = "#test";

/// A running bot, killed on drop.
pub struct TestBot {
    child: Child,
    _dir: TempDir,
}

impl TestBot {
    /// Spawn a bot pointed at `port` with the given plugins enabled.
    pub fn spawn(port: u16, commands: &[&str], listeners: &[&str]) -> anyhow::Result<Self> {
        let quoted = |names: &[&str]| {
            names
                .iter()
                .map(|name| format!("\"{name}\""))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let config = format!(
            r#"
[server]
address = "127.0.0.1"
port = {port}
connect_timeout_secs = 5

[identity]
nickname = "{NICK}"
fullname = "Test Bot"

[bot]
channel = "{CHANNEL}"
commands = [{}]
listeners = [{}]
"#,
            quoted(commands),
            quoted(listeners),
        );
        Self::spawn_with_config(&config)
    }

    /// Spawn a bot with a literal config file.
    pub fn spawn_with_config(config: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path: PathBuf = dir.path().join("config.toml");
        std::fs::write(&config_path, config)?;

        let child = Command::new(env!("CARGO_BIN_EXE_slircbot"))
            .arg(&config_path)
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .spawn()?;

        Ok(Self { child, _dir: dir })
    }

    /// Wait for the process to exit on its own.
    pub async fn wait_exit(&mut self, limit: Duration) -> anyhow::Result<ExitStatus> {
        let step = Duration::from_millis(50);
        let mut waited = Duration::ZERO;
        while waited < limit {
            if let Some(status) = self.child.try_wait()? {
                return Ok(status);
            }
            sleep(step).await;
            waited += step;
        }
        anyhow::bail!("Bot still running after {limit:?}")
    }
}

impl Drop for TestBot {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
