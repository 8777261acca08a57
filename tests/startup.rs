//! Startup failures end the process with an error status.

mod common;

use common::{TestBot, TestServer};
use std::time::Duration;

#[tokio::test]
async fn invalid_config_is_rejected() -> anyhow::Result<()> {
    let mut bot = TestBot::spawn_with_config(
        r#"
[server]
address = "127.0.0.1"

[identity]
nickname = "bad nick"

[bot]
channel = "nochannel"
commands = ["frobnicate"]
"#,
    )?;

    let status = bot.wait_exit(Duration::from_secs(5)).await?;
    assert!(!status.success());
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_fatal() -> anyhow::Result<()> {
    let port = TestServer::bind().await?.port();

    let mut bot = TestBot::spawn(port, &[], &[])?;
    let status = bot.wait_exit(Duration::from_secs(10)).await?;
    assert!(!status.success());
    Ok(())
}
