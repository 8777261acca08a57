//! Core configuration types.

use super::defaults::{
    default_connect_timeout_secs, default_max_line_buffer, default_mode, default_port,
    default_trigger, secs,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<super::ValidationError>),
}

fn join_errors(errors: &[super::ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server to connect to.
    pub server: ServerConfig,
    /// Who the bot says it is.
    pub identity: IdentityConfig,
    /// Channel and command settings.
    pub bot: BotConfig,
    /// Log output settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        super::validation::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Server connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Hostname or IP address (e.g., "irc.libera.chat").
    pub address: String,
    /// Port (default: 6667).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seconds to wait for the TCP connection (default: 30).
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Bytes buffered without a line feed before the connection is dropped.
    #[serde(default = "default_max_line_buffer")]
    pub max_line_buffer: usize,
}

impl ServerConfig {
    pub fn connect_timeout(&self) -> Duration {
        secs(self.connect_timeout_secs)
    }
}

/// Registration identity.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Nickname sent with NICK.
    pub nickname: String,
    /// Username for USER (defaults to the nickname).
    pub username: Option<String>,
    /// Realname for USER (defaults to the nickname).
    pub fullname: Option<String>,
    /// User mode bitmask for USER (default: 0).
    #[serde(default = "default_mode")]
    pub mode: u32,
}

impl IdentityConfig {
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.nickname)
    }

    pub fn fullname(&self) -> &str {
        self.fullname.as_deref().unwrap_or(&self.nickname)
    }
}

/// Channel, trigger and enabled plugins.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Channel joined after the welcome numeric.
    pub channel: String,
    /// Character that starts a bang-command (default: '!').
    #[serde(default = "default_trigger")]
    pub trigger: char,
    /// Built-in bang-commands to register, in order.
    #[serde(default)]
    pub commands: Vec<String>,
    /// Built-in listeners to register.
    #[serde(default)]
    pub listeners: Vec<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration. The level comes from `RUST_LOG`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}
