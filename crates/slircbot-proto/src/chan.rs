//! Channel name utilities.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// Marker that starts a channel name in a reply target.
pub const CHANNEL_PREFIX: char = '#';

/// Extension trait for channel-name checks.
pub trait ChannelExt {
    /// Whether this looks like a channel the bot can reply into.
    ///
    /// Only the leading `#` is checked, matching how reply targets are chosen.
    fn is_channel_target(&self) -> bool;

    /// Check if this string is a valid `#` channel name.
    ///
    /// Valid channel names:
    /// - Start with '#'
    /// - Do not contain space, comma, BEL (0x07), NUL or other control characters
    /// - Are at most 50 characters long
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for str {
    fn is_channel_target(&self) -> bool {
        self.starts_with(CHANNEL_PREFIX)
    }

    fn is_channel_name(&self) -> bool {
        let mut chars = self.chars();

        if chars.next() != Some(CHANNEL_PREFIX) {
            return false;
        }

        // RFC 2812 says 50 chars including prefix
        if self.chars().count() > 50 {
            return false;
        }

        chars.all(|c| c != ' ' && c != ',' && !c.is_control())
    }
}

impl ChannelExt for String {
    fn is_channel_target(&self) -> bool {
        self.as_str().is_channel_target()
    }

    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}
