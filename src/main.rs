//! slircbot - a small IRC bot on the Straylight protocol crate.
//!
//! Connects to one server, joins one channel, and answers bang-commands.

mod bot;
mod client;
mod config;
mod error;
mod plugins;
mod telemetry;

use crate::bot::Bot;
use crate::config::{Config, LogFormat};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            telemetry::init(LogFormat::Text);
            error!(path = %config_path, error = %e, "Failed to load config");
            return Err(e.into());
        }
    };

    telemetry::init(config.log.format);
    info!(
        server = %config.server.address,
        port = config.server.port,
        nick = %config.identity.nickname,
        channel = %config.bot.channel,
        "Starting slircbot"
    );

    let handlers = plugins::handlers(&config.bot);
    if handlers.is_empty() {
        warn!("No commands or listeners enabled");
    }
    let mut bot = Bot::new(config, handlers);

    bot.connect().await?;
    bot.register().await?;

    tokio::select! {
        result = bot.run() => {
            if let Err(e) = &result {
                error!(error = %e, code = e.error_code(), "Session ended");
            }
            result?;
            info!("Connection closed by server");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
            if let Err(e) = bot.quit(Some("Shutting down")).await {
                warn!(error = %e, "Failed to send QUIT");
            }
        }
    }

    info!(state = ?bot.state(), "Stopped");
    Ok(())
}
