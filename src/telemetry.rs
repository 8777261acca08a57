//! Log output setup and span constructors.

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Level comes from `RUST_LOG` (default `info`).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Standardized span constructors for bot observability.
pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Span covering one connection to a server.
    pub fn session(address: &str, nickname: &str) -> Span {
        info_span!("session", address = %address, nick = %nickname)
    }

    /// Span covering dispatch of one inbound message.
    pub fn dispatch(command: &str) -> Span {
        debug_span!("dispatch", command = %command)
    }
}
