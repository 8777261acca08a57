//! Default value functions for configuration.

use std::time::Duration;

/// Conventional plaintext IRC port.
pub fn default_port() -> u16 {
    6667
}

pub fn default_connect_timeout_secs() -> u64 {
    30
}

/// Bang-command trigger character.
pub fn default_trigger() -> char {
    '!'
}

pub fn default_mode() -> u32 {
    0
}

pub fn default_max_line_buffer() -> usize {
    slircbot_proto::DEFAULT_MAX_BUFFERED
}

pub(super) fn secs(value: u64) -> Duration {
    Duration::from_secs(value)
}
