//! Configuration loading and validation.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, ServerConfig, IdentityConfig, BotConfig, LogConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup checks that collect every problem at once

mod defaults;
mod types;
mod validation;

pub use types::{BotConfig, Config, ConfigError, LogFormat};
pub use validation::ValidationError;
