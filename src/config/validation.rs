//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use slircbot_proto::ChannelExt;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.address is required")]
    MissingAddress,
    #[error("server.port must not be 0")]
    InvalidPort,
    #[error("identity.{field} must be non-empty and contain no spaces, got '{value}'")]
    InvalidIdentity { field: &'static str, value: String },
    #[error("bot.channel is not a valid channel name: '{0}'")]
    InvalidChannel(String),
    #[error("bot.trigger must be a visible character, got {0:?}")]
    InvalidTrigger(char),
    #[error("bot.commands: unknown command '{0}'")]
    UnknownCommand(String),
    #[error("bot.listeners: unknown listener '{0}'")]
    UnknownListener(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.address.trim().is_empty() {
        errors.push(ValidationError::MissingAddress);
    }
    if config.server.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }

    let identity = &config.identity;
    for (field, value) in [
        ("nickname", identity.nickname.as_str()),
        ("username", identity.username()),
    ] {
        if value.is_empty() || value.contains(' ') {
            errors.push(ValidationError::InvalidIdentity {
                field,
                value: value.to_string(),
            });
        }
    }

    if !config.bot.channel.is_channel_name() {
        errors.push(ValidationError::InvalidChannel(config.bot.channel.clone()));
    }

    let trigger = config.bot.trigger;
    if trigger.is_whitespace() || trigger.is_control() {
        errors.push(ValidationError::InvalidTrigger(trigger));
    }

    for name in &config.bot.commands {
        if !crate::plugins::is_known_command(name) {
            errors.push(ValidationError::UnknownCommand(name.clone()));
        }
    }
    for name in &config.bot.listeners {
        if !crate::plugins::is_known_listener(name) {
            errors.push(ValidationError::UnknownListener(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
