//! Built-in bang-commands and listeners.
//!
//! Enabled by name from the `[bot]` config section. The engine knows nothing
//! about these; they are ordinary handlers registered at startup.

use crate::bot::Bot;
use crate::bot::registry::{HandlerResult, Handlers};
use crate::config::BotConfig;
use anyhow::bail;
use slircbot_proto::Message;

type PluginFn = fn(&Bot, &Message) -> HandlerResult;

/// Built-in bang-commands by name.
const COMMANDS: &[(&str, PluginFn)] = &[("echo", echo), ("time", time), ("commands", commands)];

/// Built-in listeners by name.
const LISTENERS: &[(&str, PluginFn)] = &[("greet", greet)];

pub fn is_known_command(name: &str) -> bool {
    lookup(COMMANDS, name).is_some()
}

pub fn is_known_listener(name: &str) -> bool {
    lookup(LISTENERS, name).is_some()
}

fn lookup(table: &[(&str, PluginFn)], name: &str) -> Option<PluginFn> {
    table.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// Register the configured plugins, commands in config order.
///
/// Names are checked by config validation; an unknown one is skipped.
pub fn handlers(config: &BotConfig) -> Handlers {
    let mut handlers = Handlers::new();
    for name in &config.commands {
        if let Some(f) = lookup(COMMANDS, name) {
            handlers = handlers.command(name.clone(), f);
        }
    }
    for name in &config.listeners {
        if let Some(f) = lookup(LISTENERS, name) {
            handlers = handlers.listener(f);
        }
    }
    handlers
}

/// Text after the bang word.
fn arguments(msg: &Message) -> &str {
    msg.body()
        .and_then(|body| body.split_once(' '))
        .map_or("", |(_, rest)| rest)
}

/// `!echo <text>`: say it back.
fn echo(_bot: &Bot, msg: &Message) -> HandlerResult {
    let text = arguments(msg);
    if text.is_empty() {
        bail!("usage: echo <text>");
    }
    Ok(Some(text.to_string()))
}

/// `!time`: current UTC time.
fn time(_bot: &Bot, _msg: &Message) -> HandlerResult {
    Ok(Some(
        chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    ))
}

/// `!commands`: list what is enabled.
fn commands(bot: &Bot, _msg: &Message) -> HandlerResult {
    let trigger = bot.trigger();
    let names: Vec<String> = bot
        .command_names()
        .map(|name| format!("{trigger}{name}"))
        .collect();
    Ok(Some(names.join(" ")))
}

/// Say hello when someone mentions the bot's nickname.
fn greet(bot: &Bot, msg: &Message) -> HandlerResult {
    let (Some(sender), Some(body)) = (msg.nickname(), msg.body()) else {
        return Ok(None);
    };
    let nickname = bot.nickname();
    if sender.eq_ignore_ascii_case(nickname) {
        return Ok(None);
    }

    let mentioned = body
        .split(|c: char| !(c.is_alphanumeric() || "-_[]{}\\|^`".contains(c)))
        .any(|word| word.eq_ignore_ascii_case(nickname));
    Ok(mentioned.then(|| format!("hello, {sender}")))
}
